//! Reserved display tokens.
//!
//! These exact strings are part of the operator-facing contract: a
//! decoding problem degrades to one of these short tokens instead of
//! interrupting the session. They must not be reworded.

/// A value that is structurally valid but logically holds no data
/// (null pointer, unresolvable count).
pub const EMPTY: &str = "{empty}";

/// A value that could not be decoded (failed read or remote call,
/// unrecognized element type, excessive nesting).
pub const ERROR: &str = "{error}";

/// A collection whose resolved element count is zero.
pub const EMPTY_COLLECTION: &str = "{}";

/// Suffix appended inside the quotes when a string is cut at the
/// display cap.
pub const TRUNCATION_SUFFIX: &str = "...";
