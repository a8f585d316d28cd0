//! I/O module
//!
//! Handles everything that touches the filesystem or the terminal.
//!
//! # Components
//!
//! - `database` - Flat-text database format (record conversion, load, save)
//! - `report` - Report file rendering, account display and help menu
//! - `shutdown` - Guard that writes the database back when dropped

pub mod database;
pub mod report;
pub mod shutdown;

pub use database::{load_database, write_database, DatabaseFile, DbRecord};
pub use report::{write_report, ConsoleReporter};
pub use shutdown::WriteOnShutdown;
