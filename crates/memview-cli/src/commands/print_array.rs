//! Print-array command implementation.

use std::path::Path;

use anyhow::Result;
use memview_core::CaptureProcess;
use tracing::debug;

/// Run the print-array command
pub fn run(capture_path: &Path, expr: &str) -> Result<()> {
    let capture = CaptureProcess::load(capture_path)?;
    debug!("Loaded capture from {}", capture_path.display());

    let text = memview_core::print_array(&capture, expr);
    println!("{}", text.trim_end());
    Ok(())
}
