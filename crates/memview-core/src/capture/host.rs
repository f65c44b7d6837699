//! Replay host over a session capture.
//!
//! [`CaptureProcess`] answers the accessor interface from a capture file
//! instead of a live process: memory reads come from the snapshotted
//! regions, remote calls from the recorded results. Anything the capture
//! does not contain fails the same way a live access failure would, so
//! the engine's degraded paths behave identically offline.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::command::ArrayPrintHost;
use crate::error::{Error, Result};
use crate::process::InspectedProcess;

use super::format::CaptureFile;

/// Word size used by the native range display.
const RANGE_WORD: u64 = 4;

/// A replayable inspected process built from a [`CaptureFile`].
#[derive(Debug, Clone)]
pub struct CaptureProcess {
    captured_at: DateTime<Utc>,
    process_name: Option<String>,
    regions: Vec<(u64, Vec<u8>)>,
    symbols: Vec<(String, u64)>,
    calls: HashMap<(String, Vec<u64>), u64>,
}

impl CaptureProcess {
    /// Build a replay host from a parsed capture.
    pub fn new(file: CaptureFile) -> Result<Self> {
        let mut regions = Vec::with_capacity(file.regions.len());
        for region in &file.regions {
            let bytes = hex::decode(&region.bytes).map_err(|e| {
                Error::InvalidCapture(format!(
                    "Region at {:#x} has malformed hex bytes: {}",
                    region.base, e
                ))
            })?;
            regions.push((region.base, bytes));
        }

        let calls = file
            .calls
            .iter()
            .map(|call| ((call.function.clone(), call.args.clone()), call.result))
            .collect();

        Ok(Self {
            captured_at: file.captured_at,
            process_name: file.process_name,
            symbols: file.symbols.into_iter().collect(),
            regions,
            calls,
        })
    }

    /// Load a replay host straight from a capture file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(CaptureFile::load(path)?)
    }

    /// When the capture was taken.
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Name of the inspected process, if recorded.
    pub fn process_name(&self) -> Option<&str> {
        self.process_name.as_deref()
    }

    /// Snapshotted regions as `(base, size)` pairs.
    pub fn regions(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.regions.iter().map(|(base, bytes)| (*base, bytes.len()))
    }

    /// Recorded symbols as `(name, address)` pairs.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.symbols
            .iter()
            .map(|(name, address)| (name.as_str(), *address))
    }

    /// Number of recorded remote call results.
    pub fn recorded_calls(&self) -> usize {
        self.calls.len()
    }

    fn region_containing(&self, address: u64, size: usize) -> Option<&[u8]> {
        for (base, bytes) in &self.regions {
            if address < *base {
                continue;
            }
            let offset = (address - base) as usize;
            if offset + size <= bytes.len() {
                return Some(&bytes[offset..offset + size]);
            }
        }
        None
    }
}

impl InspectedProcess for CaptureProcess {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        self.region_containing(address, size)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| Error::MemoryReadFailed {
                address,
                message: format!("No captured region covers {} bytes here", size),
            })
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

impl ArrayPrintHost for CaptureProcess {
    /// Resolve a `0x`-prefixed hex literal, a decimal literal, or a
    /// captured symbol name.
    fn evaluate(&self, expr: &str) -> Result<u64> {
        let expr = expr.trim();
        if let Some(hex_digits) = expr.strip_prefix("0x").or_else(|| expr.strip_prefix("0X")) {
            return u64::from_str_radix(hex_digits, 16).map_err(|e| Error::EvalFailed {
                expr: expr.to_string(),
                message: e.to_string(),
            });
        }
        if expr.chars().all(|c| c.is_ascii_digit()) && !expr.is_empty() {
            return expr.parse().map_err(|e: std::num::ParseIntError| Error::EvalFailed {
                expr: expr.to_string(),
                message: e.to_string(),
            });
        }
        self.symbols
            .iter()
            .find(|(name, _)| name == expr)
            .map(|(_, address)| *address)
            .ok_or_else(|| Error::EvalFailed {
                expr: expr.to_string(),
                message: "Not a literal and not a captured symbol".to_string(),
            })
    }

    /// Native range display: `count` 32-bit words, one line of
    /// `address: value` per word.
    fn print_range(&self, address: u64, count: u64) -> Result<String> {
        let mut out = String::new();
        for index in 0..count {
            let word_address = address + index * RANGE_WORD;
            let word = self.read_u32(word_address)?;
            let _ = writeln!(out, "{:#014x}: 0x{:08x}", word_address, word);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::capture::format::{CaptureCall, CaptureRegion};

    fn sample_capture() -> CaptureProcess {
        let file = CaptureFile {
            captured_at: "2024-05-01T12:00:00Z".parse().unwrap(),
            process_name: Some("game".to_string()),
            regions: vec![
                CaptureRegion {
                    base: 0x1000,
                    bytes: hex::encode([0xFF, 0x00, 0x00, 0xFF, 0x01, 0x02, 0x03, 0x04]),
                },
                CaptureRegion {
                    base: 0x2000,
                    bytes: hex::encode(1234u32.to_le_bytes()),
                },
            ],
            symbols: BTreeMap::from([("palette".to_string(), 0x1000)]),
            calls: vec![CaptureCall {
                function: "array_count".to_string(),
                args: vec![0x1000],
                result: 2,
            }],
        };
        CaptureProcess::new(file).unwrap()
    }

    #[test]
    fn test_read_from_region() {
        let capture = sample_capture();
        assert_eq!(
            capture.read_bytes(0x1000, 4).unwrap(),
            vec![0xFF, 0x00, 0x00, 0xFF]
        );
        // Interior offset within a region.
        assert_eq!(capture.read_bytes(0x1004, 2).unwrap(), vec![0x01, 0x02]);
        // Second region.
        assert_eq!(capture.read_u32(0x2000).unwrap(), 1234);
    }

    #[test]
    fn test_read_outside_regions_fails() {
        let capture = sample_capture();
        assert!(capture.read_bytes(0x3000, 4).is_err());
        // Spans past the end of a region.
        assert!(capture.read_bytes(0x1006, 4).is_err());
    }

    #[test]
    fn test_recorded_call() {
        let capture = sample_capture();
        assert_eq!(capture.call_remote("array_count", &[0x1000]).unwrap(), 2);
        assert!(capture.call_remote("array_count", &[0x2000]).is_err());
        assert!(capture.call_remote("map_count", &[0x1000]).is_err());
    }

    #[test]
    fn test_evaluate_literals_and_symbols() {
        let capture = sample_capture();
        assert_eq!(capture.evaluate("0x1000").unwrap(), 0x1000);
        assert_eq!(capture.evaluate("4096").unwrap(), 4096);
        assert_eq!(capture.evaluate("palette").unwrap(), 0x1000);
        assert!(capture.evaluate("missing").is_err());
        assert!(capture.evaluate("0xZZ").is_err());
    }

    #[test]
    fn test_print_range_words() {
        let capture = sample_capture();
        let text = capture.print_range(0x1000, 2).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0x000000001000:"));
        assert!(lines[1].starts_with("0x000000001004:"));
    }

    #[test]
    fn test_malformed_region_hex_is_invalid_capture() {
        let file = CaptureFile {
            captured_at: "2024-05-01T12:00:00Z".parse().unwrap(),
            process_name: None,
            regions: vec![CaptureRegion {
                base: 0x1000,
                bytes: "zz".to_string(),
            }],
            symbols: BTreeMap::new(),
            calls: Vec::new(),
        };
        assert!(matches!(
            CaptureProcess::new(file),
            Err(Error::InvalidCapture(_))
        ));
    }
}
