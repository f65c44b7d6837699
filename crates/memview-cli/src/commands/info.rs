//! Info command implementation.

use std::path::Path;

use anyhow::Result;
use memview_core::CaptureProcess;
use owo_colors::OwoColorize;

/// Run the info command
pub fn run(capture_path: &Path) -> Result<()> {
    let capture = CaptureProcess::load(capture_path)?;

    println!("{}", "Capture".bold());
    println!("  taken:   {}", capture.captured_at());
    if let Some(name) = capture.process_name() {
        println!("  process: {}", name);
    }

    println!("{}", "Regions".bold());
    for (base, size) in capture.regions() {
        println!("  {:#014x}  {} bytes", base, size);
    }

    let symbols: Vec<_> = capture.symbols().collect();
    if !symbols.is_empty() {
        println!("{}", "Symbols".bold());
        for (name, address) in symbols {
            println!("  {}  {}", format!("{:#014x}", address).dimmed(), name);
        }
    }

    println!(
        "{} {}",
        "Recorded remote calls:".bold(),
        capture.recorded_calls()
    );

    Ok(())
}
