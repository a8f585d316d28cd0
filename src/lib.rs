//! Bank Account Ledger Library
//! # Overview
//!
//! This library loads a flat-text database of bank accounts, applies the
//! changes and queries requested through `/X<value>` command-line switches,
//! and writes the database back when the invocation ends.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Switch, LedgerError)
//! - [`cli`] - CLI arguments parsing and switch tokenizing
//! - [`core`] - Business logic components:
//!   - [`core::validators`] - Field syntax checks
//!   - [`core::account_store`] - Account lookup and transfers
//!   - [`core::switch_queue`] - Per-switch value queues
//!   - [`core::dispatcher`] - Ordered command table and dispatch loop
//! - [`io`] - Database format, report rendering and write-on-shutdown
//! - [`runner`] - One complete invocation
//!
//! # Commands
//!
//! Mutations run first, in this fixed order:
//!
//! - **Area code** (`/A`), **first name** (`/F`), **phone** (`/H`),
//!   **last name** (`/L`), **middle initial** (`/M`), **SSN** (`/S`)
//! - **Transfer** (`/T`): move a whole amount between two accounts
//! - **Password** (`/W`)
//!
//! Then queries: **display info** (`/I`) and **write report** (`/R`).
//!
//! Each command takes its account credentials from the next unconsumed
//! `/N` (number) and `/P` (password) values.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use crate::core::{AccountStore, Dispatcher, SwitchQueue};
pub use io::{ConsoleReporter, DatabaseFile, WriteOnShutdown};
pub use types::{Account, LedgerError, Switch};
