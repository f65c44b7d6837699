//! Value decoding and rendering engine.
//!
//! Given a type name and a raw address in the inspected process, the
//! engine classifies the representation, reads only the bytes that
//! representation owns, and produces a bounded human-readable string.
//! Every entry point is total: corrupt, null, or absurdly large pointees
//! degrade to a short display token, never a panic.

mod array;
mod classify;
mod color;
mod scalar;
mod string;
pub mod tokens;

pub use classify::{classify, ScalarKind, TypeClass};

use tracing::{debug, warn};

use crate::process::InspectedProcess;

/// Display bounds applied while rendering.
///
/// The defaults are the operator-facing contract; hosts may widen or
/// narrow them when constructing the [`Formatter`].
#[derive(Debug, Clone)]
pub struct RenderLimits {
    /// Logical characters shown before a string is truncated.
    pub string_chars: usize,
    /// Elements shown per array level.
    pub array_elements: u64,
    /// Nesting depth before array-of-array rendering gives up.
    pub max_depth: u32,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            string_chars: 32,
            array_elements: 64,
            max_depth: 4,
        }
    }
}

/// The rendering engine.
///
/// Holds nothing but display limits: no process handle, no cache, no
/// global registry. The host constructs one and passes the accessor
/// handle into each call, so every decode is independent and stateless.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    limits: RenderLimits,
}

impl Formatter {
    /// Create a formatter with the default display limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom display limits.
    pub fn with_limits(limits: RenderLimits) -> Self {
        Self { limits }
    }

    /// The display limits in effect.
    pub fn limits(&self) -> &RenderLimits {
        &self.limits
    }

    /// Render the value of type `type_name` living at `address`.
    ///
    /// Returns `None` when the type name matches no decoding strategy,
    /// so the host can fall back to its own default display. Otherwise
    /// the result is always a rendering: a value, an empty token, or an
    /// error token.
    pub fn render<P: InspectedProcess + ?Sized>(
        &self,
        process: &P,
        type_name: &str,
        address: u64,
    ) -> Option<String> {
        let class = classify(type_name)?;
        Some(self.decode(process, &class, address, 0))
    }

    /// Decode one classified value. Total: failures become tokens here
    /// and never cross this boundary.
    pub(crate) fn decode<P: InspectedProcess + ?Sized>(
        &self,
        process: &P,
        class: &TypeClass,
        address: u64,
        depth: u32,
    ) -> String {
        if depth > self.limits.max_depth {
            warn!("Render depth cap exceeded at depth {}", depth);
            return tokens::ERROR.to_string();
        }
        match class {
            TypeClass::Scalar(kind) => scalar::decode_scalar(process, *kind, address)
                .unwrap_or_else(|e| {
                    debug!("Scalar decode failed at {:#x}: {}", address, e);
                    tokens::ERROR.to_string()
                }),
            TypeClass::Color => color::decode_color(process, address).unwrap_or_else(|e| {
                debug!("Color decode failed at {:#x}: {}", address, e);
                tokens::ERROR.to_string()
            }),
            TypeClass::Str8 | TypeClass::Dstr8 => {
                string::decode_counted(process, address, &self.limits).unwrap_or_else(|e| {
                    debug!("String decode failed at {:#x}: {}", address, e);
                    tokens::ERROR.to_string()
                })
            }
            TypeClass::Array { element } => {
                array::decode_array(self, process, element, address, depth)
            }
        }
    }
}
