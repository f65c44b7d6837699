//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands (which would require a
//! capture file on disk).

use clap::Parser;

// Re-create the Args structure for testing since it's not publicly
// exported from the binary.
#[derive(Parser)]
#[command(name = "memview")]
struct Args {
    #[arg(short, long, default_value = "capture.json")]
    capture: std::path::PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Print {
        #[arg(long = "type", value_name = "TYPE")]
        type_name: String,
        expr: String,
        #[arg(long)]
        max_elements: Option<u64>,
    },
    PrintArray {
        expr: String,
    },
    Info,
}

#[test]
fn test_parse_print_command() {
    let args = Args::parse_from(["memview", "print", "--type", "color", "0x1000"]);
    match args.command {
        Command::Print {
            type_name,
            expr,
            max_elements,
        } => {
            assert_eq!(type_name, "color");
            assert_eq!(expr, "0x1000");
            assert_eq!(max_elements, None);
        }
        _ => panic!("expected print command"),
    }
    assert_eq!(args.capture, std::path::PathBuf::from("capture.json"));
}

#[test]
fn test_parse_print_with_generic_type_and_cap() {
    let args = Args::parse_from([
        "memview",
        "--capture",
        "session.json",
        "print",
        "--type",
        "arrayT<color>",
        "palette",
        "--max-elements",
        "8",
    ]);
    assert_eq!(args.capture, std::path::PathBuf::from("session.json"));
    match args.command {
        Command::Print {
            type_name,
            expr,
            max_elements,
        } => {
            assert_eq!(type_name, "arrayT<color>");
            assert_eq!(expr, "palette");
            assert_eq!(max_elements, Some(8));
        }
        _ => panic!("expected print command"),
    }
}

#[test]
fn test_parse_print_array_command() {
    let args = Args::parse_from(["memview", "print-array", "0x2000"]);
    match args.command {
        Command::PrintArray { expr } => assert_eq!(expr, "0x2000"),
        _ => panic!("expected print-array command"),
    }
}

#[test]
fn test_parse_info_command() {
    let args = Args::parse_from(["memview", "info"]);
    assert!(matches!(args.command, Command::Info));
}

#[test]
fn test_print_requires_type() {
    assert!(Args::try_parse_from(["memview", "print", "0x1000"]).is_err());
}

#[test]
fn test_missing_subcommand_is_error() {
    assert!(Args::try_parse_from(["memview"]).is_err());
}
