//! Accessor boundary to the inspected process.
//!
//! The formatting engine never owns process access. The host debugger
//! supplies an implementation of [`InspectedProcess`], and the engine
//! borrows it for the duration of a single decode call. Nothing read
//! through this trait is retained across calls.

use crate::error::Result;

/// Trait for reading memory from, and invoking routines in, one paused
/// inspected process.
///
/// Every operation is fallible: a bad pointer or an uncallable process
/// state surfaces as an `Err`, which the decoders recover into a display
/// token. A corrupt pointee must never bring down the debugging session.
pub trait InspectedProcess {
    /// Read raw bytes from memory at the given address.
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>>;

    /// Invoke a routine inside the inspected process and return its result.
    ///
    /// This briefly runs the inspected process and blocks until the call
    /// completes. It may fail if the process is not in a callable state
    /// or the routine does not exist.
    fn call_remote(&self, function: &str, args: &[u64]) -> Result<u64>;

    /// Read an unsigned 8-bit integer from memory.
    fn read_u8(&self, address: u64) -> Result<u8> {
        let bytes = self.read_bytes(address, 1)?;
        Ok(bytes[0])
    }

    /// Read a signed 8-bit integer from memory.
    fn read_i8(&self, address: u64) -> Result<i8> {
        Ok(self.read_u8(address)? as i8)
    }

    /// Read an unsigned 16-bit integer from memory.
    fn read_u16(&self, address: u64) -> Result<u16> {
        let bytes = self.read_bytes(address, 2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a signed 16-bit integer from memory.
    fn read_i16(&self, address: u64) -> Result<i16> {
        Ok(self.read_u16(address)? as i16)
    }

    /// Read an unsigned 32-bit integer from memory.
    fn read_u32(&self, address: u64) -> Result<u32> {
        let bytes = self.read_bytes(address, 4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a signed 32-bit integer from memory.
    fn read_i32(&self, address: u64) -> Result<i32> {
        Ok(self.read_u32(address)? as i32)
    }

    /// Read an unsigned 64-bit integer from memory.
    fn read_u64(&self, address: u64) -> Result<u64> {
        let bytes = self.read_bytes(address, 8)?;
        Ok(u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Read a signed 64-bit integer from memory.
    fn read_i64(&self, address: u64) -> Result<i64> {
        Ok(self.read_u64(address)? as i64)
    }

    /// Read a 32-bit float from memory.
    fn read_f32(&self, address: u64) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32(address)?))
    }

    /// Read a 64-bit float from memory.
    fn read_f64(&self, address: u64) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64(address)?))
    }
}
