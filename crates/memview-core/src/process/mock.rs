//! Mock inspected process for testing
//!
//! Provides a configurable mock implementation of the [`InspectedProcess`]
//! trait that reads from an in-memory buffer and answers remote calls from
//! a recorded table, so decoding logic can be tested without a live
//! debugging session.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::process::InspectedProcess;

/// Mock inspected process for testing
///
/// Memory reads are answered from an in-memory buffer; remote calls are
/// answered from a table of recorded `(function, args) -> result` entries.
/// Anything outside the buffer or the table fails, which is how tests
/// exercise the failure paths.
#[derive(Debug, Clone)]
pub struct MockProcess {
    data: Vec<u8>,
    base: u64,
    calls: HashMap<(String, Vec<u64>), u64>,
}

impl MockProcess {
    /// Create a new mock process with the given data at base address 0x1000
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            base: 0x1000,
            calls: HashMap::new(),
        }
    }

    /// Create a new mock process with a custom base address
    pub fn with_base(data: Vec<u8>, base: u64) -> Self {
        Self {
            data,
            base,
            calls: HashMap::new(),
        }
    }

    /// Get the size of the underlying buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the base address of the buffer
    pub fn base_address(&self) -> u64 {
        self.base
    }
}

impl InspectedProcess for MockProcess {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        if address < self.base {
            return Err(Error::MemoryReadFailed {
                address,
                message: format!("Address below base (base=0x{:X})", self.base),
            });
        }
        let offset = (address - self.base) as usize;
        if offset + size > self.data.len() {
            return Err(Error::MemoryReadFailed {
                address,
                message: format!(
                    "Out of bounds: offset={}, size={}, len={}",
                    offset,
                    size,
                    self.data.len()
                ),
            });
        }
        Ok(self.data[offset..offset + size].to_vec())
    }

    fn call_remote(&self, function: &str, args: &[u64]) -> Result<u64> {
        self.calls
            .get(&(function.to_string(), args.to_vec()))
            .copied()
            .ok_or_else(|| Error::RemoteCallFailed {
                function: function.to_string(),
                message: format!("No recorded result for args {:X?}", args),
            })
    }
}

/// Builder for creating mock process images
///
/// Provides a fluent API for constructing memory layouts and remote call
/// tables for testing.
#[derive(Debug, Clone, Default)]
pub struct MockProcessBuilder {
    data: Vec<u8>,
    base: u64,
    calls: HashMap<(String, Vec<u64>), u64>,
}

impl MockProcessBuilder {
    /// Create a new builder with default base address (0x1000)
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            base: 0x1000,
            calls: HashMap::new(),
        }
    }

    /// Set the base address for the mock process
    pub fn base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Pre-allocate the buffer with zeros up to the specified size
    pub fn with_size(mut self, size: usize) -> Self {
        self.data.resize(size, 0);
        self
    }

    /// Write a single byte at the specified offset from base
    pub fn write_u8(mut self, offset: usize, value: u8) -> Self {
        self.ensure_size(offset + 1);
        self.data[offset] = value;
        self
    }

    /// Write an unsigned 32-bit integer at the specified offset from base
    pub fn write_u32(mut self, offset: usize, value: u32) -> Self {
        self.ensure_size(offset + 4);
        self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        self
    }

    /// Write a signed 64-bit integer at the specified offset from base
    pub fn write_i64(mut self, offset: usize, value: i64) -> Self {
        self.ensure_size(offset + 8);
        self.data[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
        self
    }

    /// Write an unsigned 64-bit integer at the specified offset from base
    pub fn write_u64(mut self, offset: usize, value: u64) -> Self {
        self.ensure_size(offset + 8);
        self.data[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
        self
    }

    /// Write raw bytes at the specified offset from base
    pub fn write_bytes(mut self, offset: usize, bytes: &[u8]) -> Self {
        self.ensure_size(offset + bytes.len());
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    /// Write a counted string value at `offset`: the `{str, count}` header
    /// pointing at `payload_offset`, and the raw payload bytes there.
    ///
    /// `count` is the declared logical character count, which may be less
    /// than `payload.len()` when the payload contains escape markers.
    pub fn write_str8(mut self, offset: usize, payload_offset: usize, payload: &[u8], count: i64) -> Self {
        let pointer = self.base + payload_offset as u64;
        self = self.write_u64(offset, pointer);
        self = self.write_i64(offset + 8, count);
        self.write_bytes(payload_offset, payload)
    }

    /// Record a remote call result: `function(args) -> result`
    pub fn remote_call(mut self, function: &str, args: &[u64], result: u64) -> Self {
        self.calls
            .insert((function.to_string(), args.to_vec()), result);
        self
    }

    /// Build the MockProcess
    pub fn build(self) -> MockProcess {
        MockProcess {
            data: self.data,
            base: self.base,
            calls: self.calls,
        }
    }

    fn ensure_size(&mut self, required: usize) {
        if self.data.len() < required {
            self.data.resize(required, 0);
        }
    }
}
