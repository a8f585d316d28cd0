// CLI module
// Command-line interface, argument parsing and switch tokenizing

mod args;

pub use args::{tokenize, CliArgs};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (unknown flag, or `--help`/`--version`), clap prints the
/// message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
