//! Type classification.
//!
//! Maps a type name to the decoding strategy that applies. Exact-name
//! rules are tried first in a fixed order; pattern rules (collection-like
//! names) only run after every exact rule has failed, so a pattern can
//! never shadow an exact match. Classification is pure string matching
//! with no process access.

use std::str::FromStr;

use strum::EnumString;

use crate::process::layout;

/// Fixed-width numeric type names used by the inspected runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ScalarKind {
    U8,
    U16,
    U32,
    U64,
    S8,
    S16,
    S32,
    S64,
    F32,
    F64,
    /// 32-bit boolean; any nonzero value is true.
    B32,
}

impl ScalarKind {
    /// Size of one value in bytes.
    pub fn size(&self) -> u64 {
        match self {
            ScalarKind::U8 | ScalarKind::S8 => 1,
            ScalarKind::U16 | ScalarKind::S16 => 2,
            ScalarKind::U32 | ScalarKind::S32 | ScalarKind::F32 | ScalarKind::B32 => 4,
            ScalarKind::U64 | ScalarKind::S64 | ScalarKind::F64 => 8,
        }
    }
}

/// Decoding strategy for a classified type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeClass {
    /// Fixed-width numeric value.
    Scalar(ScalarKind),
    /// 4-channel color aggregate.
    Color,
    /// Counted string (`{str, count}` header).
    Str8,
    /// Growable counted string; same leading layout as `Str8`, larger
    /// footprint when laid out in an array.
    Dstr8,
    /// Dynamic array of the named element type, counted through the
    /// remote accessor call.
    Array { element: String },
}

impl TypeClass {
    /// Stride of one value of this class when laid out contiguously.
    ///
    /// Array-typed elements are held as pointers to their own element
    /// sequence, so their in-array stride is one pointer.
    pub fn stride(&self) -> u64 {
        match self {
            TypeClass::Scalar(kind) => kind.size(),
            TypeClass::Color => layout::color::SIZE,
            TypeClass::Str8 => layout::str8::SIZE,
            TypeClass::Dstr8 => layout::dstr8::SIZE,
            TypeClass::Array { .. } => layout::POINTER_SIZE,
        }
    }
}

/// Classify a type name into its decoding strategy.
///
/// Returns `None` when no rule matches; the host is expected to fall
/// back to its own default display rather than treat that as an error.
pub fn classify(type_name: &str) -> Option<TypeClass> {
    let name = type_name.trim();

    // Exact rules: aggregate, then the string family.
    match name {
        "color" => return Some(TypeClass::Color),
        "str8" => return Some(TypeClass::Str8),
        "dstr8" => return Some(TypeClass::Dstr8),
        _ => {}
    }
    if let Ok(kind) = ScalarKind::from_str(name) {
        return Some(TypeClass::Scalar(kind));
    }

    // Pattern rules: collection-like names.
    if let Some(inner) = name.strip_prefix("arrayT<").and_then(|rest| rest.strip_suffix('>')) {
        let element = inner.trim();
        if !element.is_empty() {
            return Some(TypeClass::Array {
                element: element.to_string(),
            });
        }
    }
    if let Some(element) = name.strip_suffix("_array") {
        if !element.is_empty() {
            return Some(TypeClass::Array {
                element: element.to_string(),
            });
        }
    }

    None
}
