//! Print command implementation.

use std::path::Path;

use anyhow::Result;
use memview_core::{
    ArrayPrintHost, CaptureProcess, Formatter, InspectedProcess, RenderLimits,
};
use tracing::debug;

/// Bytes shown by the raw fallback display for unrecognized types.
const RAW_FALLBACK_BYTES: usize = 16;

/// Run the print command
pub fn run(capture_path: &Path, type_name: &str, expr: &str, max_elements: Option<u64>) -> Result<()> {
    let capture = CaptureProcess::load(capture_path)?;
    debug!("Loaded capture from {}", capture_path.display());

    let address = capture.evaluate(expr)?;

    let mut limits = RenderLimits::default();
    if let Some(elements) = max_elements {
        limits.array_elements = elements;
    }
    let formatter = Formatter::with_limits(limits);

    match formatter.render(&capture, type_name, address) {
        Some(text) => println!("{} ({}) = {}", expr, type_name, text),
        None => {
            // No decoder claimed the type; fall back to the default raw
            // display instead of failing.
            debug!("Type `{}` not recognized, using raw display", type_name);
            match capture.read_bytes(address, RAW_FALLBACK_BYTES) {
                Ok(bytes) => println!("{} ({}) = <raw {}>", expr, type_name, hex::encode(bytes)),
                Err(e) => println!("{} ({}) = unreadable: {}", expr, type_name, e),
            }
        }
    }

    Ok(())
}
