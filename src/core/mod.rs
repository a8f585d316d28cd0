//! Core business logic module
//!
//! This module contains the command processing components:
//! - `validators` - Syntax checks for proposed field values
//! - `account_store` - In-memory account collection and balance operations
//! - `switch_queue` - Per-letter queues of command-line values
//! - `dispatcher` - Ordered command table and the dispatch loop
//! - `traits` - Seams for reporting and persistence

pub mod account_store;
pub mod dispatcher;
pub mod switch_queue;
pub mod traits;
pub mod validators;

pub use account_store::AccountStore;
pub use dispatcher::{Command, Dispatcher, FieldUpdate, Query, MUTATIONS, QUERIES};
pub use switch_queue::SwitchQueue;
pub use traits::{Persist, Reporter};
