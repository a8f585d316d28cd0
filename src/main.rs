//! Bank Account Ledger CLI
//!
//! Command-line interface for managing accounts in a flat-text database.
//!
//! # Usage
//!
//! ```bash
//! bankacct /?
//! bankacct /Dbank.db /NA0001 /PSECRT1 /H5551234 /I
//! bankacct /Dbank.db /NA0001 /PSECRT1 /NA0002 /PSECRT2 /T30
//! bankacct -v /Dbank.db /Rreport.txt
//! ```
//!
//! The database is written back on exit whenever it was loaded, even if a
//! command failed.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Database file not specified
//! - 2: Database file could not be loaded
//! - 3: An account was needed, but not supplied
//! - 4: Information was needed, but not supplied
//! - 5: The report file could not be written
//! - 6: An account to transfer to was needed, but not supplied
//! - 7: The transfer amount exceeds the source balance

use bankacct::cli;
use bankacct::io::ConsoleReporter;
use bankacct::runner;
use log::error;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let mut reporter = ConsoleReporter::stdout();
    if let Err(e) = runner::run(args.switch_queue(), &mut reporter) {
        error!("{}", e);
        process::exit(e.exit_code());
    }
}
