//! Color aggregate decoding.

use crate::error::Result;
use crate::process::layout;
use crate::process::InspectedProcess;

/// Decode a color value at `address` into `(r, g, b, a)`.
///
/// Channels are read in declaration order. One failed channel read fails
/// the whole rendering; a partially-filled tuple is never produced. No
/// color-space conversion or clamping is applied.
pub(crate) fn decode_color<P: InspectedProcess + ?Sized>(
    process: &P,
    address: u64,
) -> Result<String> {
    let r = process.read_u8(address + layout::color::R)?;
    let g = process.read_u8(address + layout::color::G)?;
    let b = process.read_u8(address + layout::color::B)?;
    let a = process.read_u8(address + layout::color::A)?;
    Ok(format!("({}, {}, {}, {})", r, g, b, a))
}
