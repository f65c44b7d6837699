//! Counted-string decoding.
//!
//! The inspected runtime's strings carry a logical character count next
//! to a raw byte pointer, with no terminator. The raw byte span is NOT
//! the count: an escape-marker byte means that logical character
//! consumed two raw bytes, so the true span has to be recomputed by
//! scanning. Exactly one extra byte per marker is assumed; multi-byte
//! escape sequences beyond that are deliberately not handled.

use crate::error::Result;
use crate::process::layout;
use crate::process::InspectedProcess;
use crate::render::tokens;
use crate::render::RenderLimits;

/// Outcome of scanning a buffer for a number of logical characters.
#[derive(Debug, PartialEq, Eq)]
enum Scan {
    /// All requested characters fit; `raw` bytes were consumed.
    Complete { raw: usize },
    /// The buffer ended mid-scan; at least `min_len` bytes are needed.
    NeedMore { min_len: usize },
}

/// Walk `bytes` until `want` logical characters are accounted for.
///
/// A plain byte is one logical character; an escape marker consumes the
/// marker plus the byte after it.
fn scan_span(bytes: &[u8], want: usize) -> Scan {
    let mut raw = 0;
    let mut logical = 0;
    while logical < want {
        if raw >= bytes.len() {
            return Scan::NeedMore {
                min_len: raw + (want - logical),
            };
        }
        let step = if bytes[raw] == layout::ESCAPE_MARKER { 2 } else { 1 };
        if raw + step > bytes.len() {
            return Scan::NeedMore {
                min_len: raw + step + (want - logical - 1),
            };
        }
        raw += step;
        logical += 1;
    }
    Scan::Complete { raw }
}

/// Decode the counted string whose `{str, count}` header lives at
/// `address`.
///
/// A null pointer renders as the empty-value token regardless of the
/// count; a non-null pointer with a count of zero renders as an
/// explicitly-empty quoted string. At most
/// [`RenderLimits::string_chars`] logical characters are shown, with a
/// truncation suffix beyond that.
pub(crate) fn decode_counted<P: InspectedProcess + ?Sized>(
    process: &P,
    address: u64,
    limits: &RenderLimits,
) -> Result<String> {
    let str_ptr = process.read_u64(address + layout::str8::STR)?;
    let count = process.read_i64(address + layout::str8::COUNT)?;

    if str_ptr == 0 {
        return Ok(tokens::EMPTY.to_string());
    }
    if count <= 0 {
        return Ok("\"\"".to_string());
    }

    let count = count as u64;
    let want = count.min(limits.string_chars as u64) as usize;

    // The span grows as markers are discovered: start from one byte per
    // character and re-read until the scan completes. Each round raises
    // the lower bound, so this terminates.
    let mut span = want;
    let (buffer, raw) = loop {
        let bytes = process.read_bytes(str_ptr, span)?;
        match scan_span(&bytes, want) {
            Scan::Complete { raw } => break (bytes, raw),
            Scan::NeedMore { min_len } => span = min_len,
        }
    };

    let mut out = String::from("\"");
    out.push_str(&String::from_utf8_lossy(&buffer[..raw]));
    if count > limits.string_chars as u64 {
        out.push_str(tokens::TRUNCATION_SUFFIX);
    }
    out.push('"');
    Ok(out)
}
