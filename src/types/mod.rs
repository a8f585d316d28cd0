//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: The account record and its bounded string fields
//! - `switch`: Command-line switch letters
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod switch;

pub use account::{Account, AccountNumber, BoundedString, Name, Password};
pub use error::{FieldError, LedgerError};
pub use switch::Switch;
