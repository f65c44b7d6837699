//! Session capture file format.
//!
//! A capture is a JSON snapshot of one paused inspection session: the
//! memory regions that were read, the symbols that were resolved, and
//! the results of remote accessor calls recorded at capture time. It
//! exists so renderings can be replayed and inspected offline, without
//! the live process.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One contiguous memory region snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureRegion {
    /// Base address of the region in the inspected process.
    pub base: u64,
    /// Region contents, hex-encoded.
    pub bytes: String,
}

/// One recorded remote call and its result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureCall {
    pub function: String,
    pub args: Vec<u64>,
    pub result: u64,
}

/// A serialized inspection session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureFile {
    /// When the snapshot was taken.
    pub captured_at: DateTime<Utc>,
    /// Name of the inspected process, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
    pub regions: Vec<CaptureRegion>,
    /// Symbol name to address.
    #[serde(default)]
    pub symbols: BTreeMap<String, u64>,
    /// Remote call results recorded at capture time.
    #[serde(default)]
    pub calls: Vec<CaptureCall>,
}

impl CaptureFile {
    /// Load a capture from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a capture from a JSON string.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the capture to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
