//! Seams between the dispatch core and its output collaborators
//!
//! The dispatcher never touches stdout or the filesystem directly. Console
//! and file implementations live in [`crate::io`]; tests substitute
//! recording implementations.

use crate::core::AccountStore;
use crate::types::{Account, LedgerError};

/// Receives everything the ledger shows to the user
pub trait Reporter {
    /// Show the usage summary
    fn display_help(&mut self);

    /// Show every field of a single account
    fn display_info(&mut self, account: &Account);

    /// Render the full account listing to `destination`
    ///
    /// `destination` is `None` when no report path was supplied.
    fn write_report(
        &mut self,
        accounts: &[Account],
        destination: Option<&str>,
    ) -> Result<(), LedgerError>;
}

/// Durable storage for the account store
pub trait Persist {
    /// Write the current state of `store`
    fn save(&mut self, store: &AccountStore) -> Result<(), LedgerError>;
}
