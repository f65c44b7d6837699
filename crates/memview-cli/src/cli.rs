//! CLI argument definitions for memview.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "memview")]
#[command(about = "Typed value viewer for captured process memory", version)]
pub struct Args {
    /// Path to the session capture file
    #[arg(short, long, env = "MEMVIEW_CAPTURE", default_value = "capture.json")]
    pub capture: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render one typed value
    Print {
        /// Type name (e.g. color, str8, arrayT<color>)
        #[arg(long = "type", value_name = "TYPE")]
        type_name: String,
        /// Address expression (hex literal, decimal, or captured symbol)
        expr: String,
        /// Override the array element display cap
        #[arg(long)]
        max_elements: Option<u64>,
    },
    /// Print a dynamic array through the native range display
    PrintArray {
        /// Address expression (hex literal, decimal, or captured symbol)
        expr: String,
    },
    /// Show capture metadata
    Info,
}
