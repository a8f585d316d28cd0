//! Invocation runner
//!
//! Runs one complete invocation:
//! 1. Shows help if no switches were given or `/?` is present
//! 2. Resolves the database path (the last `/D` value wins)
//! 3. Loads the database and hands the store to a [`WriteOnShutdown`] guard
//! 4. Sorts accounts by number and dispatches every command
//!
//! The guard is dropped when this function returns, so the database is
//! written back on every path after a successful load.

use crate::core::{AccountStore, Dispatcher, Persist, Reporter, SwitchQueue};
use crate::io::{DatabaseFile, WriteOnShutdown};
use crate::types::{Account, LedgerError, Switch};
use log::{debug, warn};

/// Run one invocation against the database named by the `/D` switch
pub fn run<R: Reporter>(mut switches: SwitchQueue, reporter: &mut R) -> Result<(), LedgerError> {
    if switches.is_empty() || switches.contains(Switch::Help) {
        reporter.display_help();
    }

    let path = switches
        .last(Switch::Database)
        .ok_or(LedgerError::NoDatabase)?
        .to_string();

    let database = DatabaseFile::new(path);
    let accounts = database.load()?;

    run_with(&mut switches, accounts, database, reporter)
}

/// Dispatch against already-loaded accounts, persisting through `persist`
pub fn run_with<P: Persist, R: Reporter>(
    switches: &mut SwitchQueue,
    accounts: Vec<Account>,
    persist: P,
    reporter: &mut R,
) -> Result<(), LedgerError> {
    let mut guard = WriteOnShutdown::new(AccountStore::load(accounts), persist);
    guard.store_mut().sort_by_number();
    if guard.store().is_empty() {
        warn!("Database holds no accounts");
    }
    debug!("Dispatching against {} accounts", guard.store().len());

    let mut dispatcher = Dispatcher::new(guard.store_mut(), reporter);
    dispatcher.run(switches)
}
