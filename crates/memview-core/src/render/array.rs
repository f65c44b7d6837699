//! Dynamic array decoding.
//!
//! The inspected runtime's arrays hand around the element base pointer;
//! the count lives in an out-of-band header and is only obtainable by
//! invoking the count accessor inside the inspected process. It is never
//! read from memory directly.

use tracing::debug;

use crate::process::layout;
use crate::process::InspectedProcess;
use crate::render::classify::{classify, TypeClass};
use crate::render::tokens;
use crate::render::Formatter;

/// Decode the array whose element sequence starts at `address`.
///
/// The element count comes from the `array_count` accessor call; a
/// failed call renders the no-data token (an unresolvable count is
/// indistinguishable from an empty array), a zero count renders the
/// empty-collection token. At most
/// [`RenderLimits::array_elements`](crate::render::RenderLimits) elements
/// are rendered, in index order, with no separator and no truncation
/// marker on the array itself. Each element dispatches back through the
/// classifier, so array rendering composes with every other decoder.
pub(crate) fn decode_array<P: InspectedProcess + ?Sized>(
    formatter: &Formatter,
    process: &P,
    element: &str,
    address: u64,
    depth: u32,
) -> String {
    let count = match process.call_remote(layout::ARRAY_COUNT_FN, &[address]) {
        Ok(count) => count,
        Err(e) => {
            debug!("Count accessor call failed for array at {:#x}: {}", address, e);
            return tokens::EMPTY.to_string();
        }
    };
    if count == 0 {
        return tokens::EMPTY_COLLECTION.to_string();
    }

    let Some(class) = classify(element) else {
        debug!("Array element type `{}` not recognized", element);
        return tokens::ERROR.to_string();
    };

    let stride = class.stride();
    let shown = count.min(formatter.limits().array_elements);
    let mut out = String::new();
    for index in 0..shown {
        let slot = address + index * stride;
        let piece = match &class {
            // Array-typed elements hold a pointer to their own element
            // sequence; chase it before recursing.
            TypeClass::Array { .. } => match process.read_u64(slot) {
                Ok(pointer) => formatter.decode(process, &class, pointer, depth + 1),
                Err(e) => {
                    debug!("Element pointer read failed at {:#x}: {}", slot, e);
                    tokens::ERROR.to_string()
                }
            },
            _ => formatter.decode(process, &class, slot, depth + 1),
        };
        out.push_str(&piece);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{layout, MockProcessBuilder};

    const BASE: u64 = 0x1000;

    #[test]
    fn test_array_count_call_failure_is_empty_token() {
        let process = MockProcessBuilder::new().with_size(64).build();
        let text = decode_array(&Formatter::new(), &process, "color", BASE, 0);
        assert_eq!(text, tokens::EMPTY);
    }

    #[test]
    fn test_array_zero_count_is_empty_collection() {
        let process = MockProcessBuilder::new()
            .with_size(64)
            .remote_call(layout::ARRAY_COUNT_FN, &[BASE], 0)
            .build();
        let text = decode_array(&Formatter::new(), &process, "color", BASE, 0);
        assert_eq!(text, tokens::EMPTY_COLLECTION);
    }

    #[test]
    fn test_array_of_colors_concatenates_in_index_order() {
        let process = MockProcessBuilder::new()
            .write_bytes(0, &[255, 0, 0, 255])
            .write_bytes(4, &[0, 255, 0, 255])
            .write_bytes(8, &[0, 0, 255, 128])
            .remote_call(layout::ARRAY_COUNT_FN, &[BASE], 3)
            .build();
        let text = decode_array(&Formatter::new(), &process, "color", BASE, 0);
        assert_eq!(text, "(255, 0, 0, 255)(0, 255, 0, 255)(0, 0, 255, 128)");
    }

    #[test]
    fn test_array_caps_elements_without_marker() {
        let mut builder = MockProcessBuilder::new().with_size(4 * 100);
        for i in 0..100u32 {
            builder = builder.write_u32(4 * i as usize, i);
        }
        let process = builder
            .remote_call(layout::ARRAY_COUNT_FN, &[BASE], 100)
            .build();

        let text = decode_array(&Formatter::new(), &process, "u32", BASE, 0);
        let expected: String = (0..64u32).map(|i| i.to_string()).collect();
        assert_eq!(text, expected);
    }

    #[test]
    fn test_array_unrecognized_element_is_error() {
        let process = MockProcessBuilder::new()
            .with_size(64)
            .remote_call(layout::ARRAY_COUNT_FN, &[BASE], 2)
            .build();
        let text = decode_array(&Formatter::new(), &process, "window", BASE, 0);
        assert_eq!(text, tokens::ERROR);
    }

    #[test]
    fn test_array_unreadable_element_renders_error_token() {
        // Count says 2 but only one element is mapped; the second element
        // degrades to the error token instead of failing the array.
        let process = MockProcessBuilder::new()
            .write_bytes(0, &[1, 2, 3, 4])
            .remote_call(layout::ARRAY_COUNT_FN, &[BASE], 2)
            .build();
        let text = decode_array(&Formatter::new(), &process, "color", BASE, 0);
        assert_eq!(text, format!("(1, 2, 3, 4){}", tokens::ERROR));
    }

    #[test]
    fn test_nested_array_dereferences_element_pointers() {
        // Outer array of two arrayT<u32>, each element slot holding the
        // inner element base pointer.
        let inner_a = BASE + 0x100;
        let inner_b = BASE + 0x200;
        let process = MockProcessBuilder::new()
            .write_u64(0, inner_a)
            .write_u64(8, inner_b)
            .write_u32(0x100, 7)
            .write_u32(0x200, 8)
            .write_u32(0x204, 9)
            .remote_call(layout::ARRAY_COUNT_FN, &[BASE], 2)
            .remote_call(layout::ARRAY_COUNT_FN, &[inner_a], 1)
            .remote_call(layout::ARRAY_COUNT_FN, &[inner_b], 2)
            .build();

        let text = decode_array(&Formatter::new(), &process, "arrayT<u32>", BASE, 0);
        assert_eq!(text, "789");
    }

    #[test]
    fn test_nested_array_with_failing_inner_count_is_empty() {
        let inner = BASE + 0x100;
        let process = MockProcessBuilder::new()
            .write_u64(0, inner)
            .remote_call(layout::ARRAY_COUNT_FN, &[BASE], 1)
            .build();
        let text = decode_array(&Formatter::new(), &process, "arrayT<u32>", BASE, 0);
        assert_eq!(text, tokens::EMPTY);
    }
}
