//! Fixed-width scalar decoding.

use crate::error::Result;
use crate::process::InspectedProcess;
use crate::render::classify::ScalarKind;

/// Decode one scalar value at `address`.
pub(crate) fn decode_scalar<P: InspectedProcess + ?Sized>(
    process: &P,
    kind: ScalarKind,
    address: u64,
) -> Result<String> {
    let text = match kind {
        ScalarKind::U8 => process.read_u8(address)?.to_string(),
        ScalarKind::U16 => process.read_u16(address)?.to_string(),
        ScalarKind::U32 => process.read_u32(address)?.to_string(),
        ScalarKind::U64 => process.read_u64(address)?.to_string(),
        ScalarKind::S8 => process.read_i8(address)?.to_string(),
        ScalarKind::S16 => process.read_i16(address)?.to_string(),
        ScalarKind::S32 => process.read_i32(address)?.to_string(),
        ScalarKind::S64 => process.read_i64(address)?.to_string(),
        ScalarKind::F32 => process.read_f32(address)?.to_string(),
        ScalarKind::F64 => process.read_f64(address)?.to_string(),
        ScalarKind::B32 => if process.read_u32(address)? != 0 {
            "true"
        } else {
            "false"
        }
        .to_string(),
    };
    Ok(text)
}
