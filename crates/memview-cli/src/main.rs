mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("memview_cli=warn,memview_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Command::Print {
            type_name,
            expr,
            max_elements,
        } => commands::print::run(&args.capture, &type_name, &expr, max_elements),
        Command::PrintArray { expr } => commands::print_array::run(&args.capture, &expr),
        Command::Info => commands::info::run(&args.capture),
    }
}
