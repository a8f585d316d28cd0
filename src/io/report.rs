//! Human-readable output
//!
//! - The fixed-column report file listing every account
//! - The field-per-line account display
//! - The help menu
//!
//! [`ConsoleReporter`] ties these to a terminal stream and the filesystem.

use crate::core::{Reporter, MUTATIONS};
use crate::types::{Account, LedgerError, Switch};
use log::warn;
use std::fs::File;
use std::io::{self, BufWriter, Write};

const REPORT_HEADER: &str = "\
-------  ----            -----           --  ---------  ------------  -------
Account  Last            First           MI  SS         Phone         Account
Number   Name            Name                Number     Number        Balance
-------  ----            -----           --  ---------  ------------  -------
";

/// Render one report row
pub fn report_row(account: &Account) -> String {
    format!(
        " {}   {:<14}  {:<14}  {}.  {:09}  ({:03}){:07}  {:.2}",
        account.number,
        account.last,
        account.first,
        account.middle,
        account.social,
        account.area,
        account.phone,
        account.balance
    )
}

/// Write the report header followed by one row per account, in slice order
pub fn write_report<W: Write>(accounts: &[Account], mut output: W) -> io::Result<()> {
    output.write_all(REPORT_HEADER.as_bytes())?;
    for account in accounts {
        writeln!(output, "{}", report_row(account))?;
    }
    output.flush()
}

/// Write every field of an account, one per line
pub fn write_info<W: Write>(account: &Account, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", account.first)?;
    writeln!(output, "{}", account.last)?;
    writeln!(output, "{}", account.middle)?;
    writeln!(output, "{:09}", account.social)?;
    writeln!(output, "{:03}", account.area)?;
    writeln!(output, "{:07}", account.phone)?;
    writeln!(output, "{:.2}", account.balance)?;
    writeln!(output, "{}", account.number)?;
    writeln!(output, "{}", account.password)
}

/// Write the usage summary
pub fn write_help<W: Write>(mut output: W) -> io::Result<()> {
    writeln!(
        output,
        "\tBank account management software version {}",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(output, "\tUsage:")?;
    writeln!(
        output,
        "\tbankacct [{}] - {}",
        Switch::Help,
        Switch::Help.description()
    )?;
    writeln!(
        output,
        "\tbankacct {}<database> <action option> [info options] - Change or display information about an account",
        Switch::Database
    )?;
    writeln!(output)?;

    writeln!(output, "\tAction Options:")?;
    let actions = MUTATIONS
        .iter()
        .map(|command| command.switch())
        .chain([Switch::Info, Switch::Report]);
    for switch in actions {
        writeln!(output, "\t\t{} - {}", switch, switch.description())?;
    }
    writeln!(output)?;

    writeln!(output, "\tInfo options:")?;
    for switch in [Switch::AccountNumber, Switch::AccountPassword] {
        writeln!(output, "\t\t{} - {}", switch, switch.description())?;
    }
    Ok(())
}

/// Reporter writing displays to a stream and reports to files
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    output: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(output: W) -> Self {
        ConsoleReporter { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleReporter::new(io::stdout())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn display_help(&mut self) {
        if let Err(e) = write_help(&mut self.output) {
            warn!("Failed to display help: {}", e);
        }
    }

    fn display_info(&mut self, account: &Account) {
        if let Err(e) = write_info(account, &mut self.output) {
            warn!("Failed to display account {}: {}", account.number, e);
        }
    }

    fn write_report(
        &mut self,
        accounts: &[Account],
        destination: Option<&str>,
    ) -> Result<(), LedgerError> {
        let path = destination
            .filter(|path| !path.is_empty())
            .ok_or_else(|| LedgerError::report_file_error(destination, "no report file given"))?;

        let file =
            File::create(path).map_err(|e| LedgerError::report_file_error(Some(path), e.to_string()))?;

        write_report(accounts, BufWriter::new(file))
            .map_err(|e| LedgerError::report_file_error(Some(path), e.to_string()))
    }
}
