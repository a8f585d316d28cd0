//! Error types for the bank account ledger
//!
//! Every failure is terminal for the current invocation and maps to exactly
//! one process exit code.
//!
//! # Exit Codes
//!
//! - 1: No database file was specified
//! - 2: The database file could not be loaded (or written back)
//! - 3: An account was needed, but not supplied
//! - 4: Information was needed, but not supplied or malformed
//! - 5: The report file could not be written
//! - 6: An account to transfer to was needed, but not supplied
//! - 7: The transfer amount exceeds the source balance

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// No `/D` switch was given
    #[error("No database file specified")]
    NoDatabase,

    /// The database file could not be opened
    #[error("Could not load \"{path}\": {message}")]
    DatabaseNotFound {
        /// The path that could not be opened
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// The database file exists but its contents are malformed
    #[error("Database parse error{}: {message}", record.map(|r| format!(" in record {}", r)).unwrap_or_default())]
    ParseError {
        /// 1-based record index (if available)
        record: Option<usize>,
        /// Description of the parsing error
        message: String,
    },

    /// I/O error occurred while writing the database
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// No acting account could be resolved for a command
    #[error("{command} requires an account")]
    AccountRequired {
        /// Command that needed the account
        command: String,
    },

    /// A command's value was missing or failed validation
    #[error("{command} requires valid information")]
    InformationRequired {
        /// Command that needed the value
        command: String,
    },

    /// The report file could not be opened for writing
    #[error("Could not write report file \"{path}\": {message}")]
    ReportFileError {
        /// Requested report path (empty if none was supplied)
        path: String,
        /// Description of the failure
        message: String,
    },

    /// The destination of a transfer could not be resolved
    #[error("Transfer requires a destination account")]
    TransferDestinationRequired,

    /// Insufficient funds in the transfer source
    #[error("Transfer from account {account} exceeds balance: balance {balance}, requested {requested}")]
    TransferExceedsBalance {
        /// Source account number
        account: String,
        /// Source balance at the time of the transfer
        balance: Decimal,
        /// Requested transfer amount
        requested: Decimal,
    },
}

impl LedgerError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            LedgerError::NoDatabase => 1,
            LedgerError::DatabaseNotFound { .. }
            | LedgerError::ParseError { .. }
            | LedgerError::IoError { .. } => 2,
            LedgerError::AccountRequired { .. } => 3,
            LedgerError::InformationRequired { .. } => 4,
            LedgerError::ReportFileError { .. } => 5,
            LedgerError::TransferDestinationRequired => 6,
            LedgerError::TransferExceedsBalance { .. } => 7,
        }
    }
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::ParseError {
            record: None,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a DatabaseNotFound error
    pub fn database_not_found(path: &str, error: &std::io::Error) -> Self {
        LedgerError::DatabaseNotFound {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create a ParseError error for a specific record
    pub fn parse_error(record: usize, message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            record: Some(record),
            message: message.into(),
        }
    }

    /// Create an AccountRequired error
    pub fn account_required(command: &str) -> Self {
        LedgerError::AccountRequired {
            command: command.to_string(),
        }
    }

    /// Create an InformationRequired error
    pub fn information_required(command: &str) -> Self {
        LedgerError::InformationRequired {
            command: command.to_string(),
        }
    }

    /// Create a ReportFileError error
    pub fn report_file_error(path: Option<&str>, message: impl Into<String>) -> Self {
        LedgerError::ReportFileError {
            path: path.unwrap_or_default().to_string(),
            message: message.into(),
        }
    }

    /// Create a TransferExceedsBalance error
    pub fn transfer_exceeds_balance(account: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::TransferExceedsBalance {
            account: account.to_string(),
            balance,
            requested,
        }
    }
}

/// A proposed field value that cannot be stored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("value has {len} characters, at most {max} allowed")]
    TooLong { max: usize, len: usize },

    #[error("malformed {field} value '{value}'")]
    Malformed { field: &'static str, value: String },
}

impl FieldError {
    pub fn malformed(field: &'static str, value: &str) -> Self {
        FieldError::Malformed {
            field,
            value: value.to_string(),
        }
    }
}
