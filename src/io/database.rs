//! Flat-text database format
//!
//! A database is a sequence of records, each made of nine whitespace-delimited
//! tokens in fixed order:
//!
//! ```text
//! last first middle social area phone balance number password
//! ```
//!
//! Any whitespace layout is accepted on load (one token per line, one record
//! per line, or a mix). Saving writes one space-delimited record per line.
//!
//! Loading is split in two steps, mirroring the save path:
//! - tokens are grouped and deserialized into a raw [`DbRecord`]
//! - [`convert_db_record`] turns the raw strings into a typed [`Account`]

use crate::core::{AccountStore, Persist};
use crate::types::{Account, AccountNumber, LedgerError, Name, Password};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::{info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::NamedTempFile;

/// Number of tokens in one database record
pub const FIELD_COUNT: usize = 9;

/// Raw database record, field order matches the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbRecord {
    pub last: String,
    pub first: String,
    pub middle: String,
    pub social: String,
    pub area: String,
    pub phone: String,
    pub balance: String,
    pub number: String,
    pub password: String,
}

impl From<&Account> for DbRecord {
    fn from(account: &Account) -> Self {
        let mut balance = account.balance;
        if balance.scale() < 2 {
            balance.rescale(2);
        }

        DbRecord {
            last: account.last.to_string(),
            first: account.first.to_string(),
            middle: account.middle.to_string(),
            social: format!("{:09}", account.social),
            area: format!("{:03}", account.area),
            phone: format!("{:07}", account.phone),
            balance: balance.to_string(),
            number: account.number.to_string(),
            password: account.password.to_string(),
        }
    }
}

/// Convert a DbRecord to an Account
///
/// Only types and capacities are checked here. Field syntax rules apply to
/// values written by the ledger, not to data it is handed.
///
/// # Returns
///
/// Result containing either:
/// - Ok(Account) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_db_record(record: DbRecord) -> Result<Account, String> {
    let mut middle_chars = record.middle.chars();
    let middle = match (middle_chars.next(), middle_chars.next()) {
        (Some(c), None) => c,
        _ => return Err(format!("Invalid middle initial '{}'", record.middle)),
    };

    let balance = Decimal::from_str(&record.balance)
        .map_err(|_| format!("Invalid balance '{}'", record.balance))?;

    Ok(Account {
        last: Name::new(record.last.as_str()).map_err(|e| format!("Invalid last name: {}", e))?,
        first: Name::new(record.first.as_str())
            .map_err(|e| format!("Invalid first name: {}", e))?,
        middle,
        social: record
            .social
            .parse()
            .map_err(|_| format!("Invalid social security number '{}'", record.social))?,
        area: record
            .area
            .parse()
            .map_err(|_| format!("Invalid area code '{}'", record.area))?,
        phone: record
            .phone
            .parse()
            .map_err(|_| format!("Invalid phone number '{}'", record.phone))?,
        balance,
        number: AccountNumber::new(record.number.as_str())
            .map_err(|e| format!("Invalid account number: {}", e))?,
        password: Password::new(record.password.as_str())
            .map_err(|e| format!("Invalid password: {}", e))?,
    })
}

/// Read every account from a database stream
///
/// # Errors
///
/// Returns a `ParseError` if the stream cannot be read, a record is
/// malformed, or the last record is incomplete.
pub fn read_accounts<R: Read>(input: R) -> Result<Vec<Account>, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(input);

    let mut tokens: Vec<String> = Vec::new();
    for result in reader.records() {
        let line = result?;
        tokens.extend(
            line.iter()
                .flat_map(str::split_whitespace)
                .map(str::to_string),
        );
    }

    let mut accounts = Vec::with_capacity(tokens.len() / FIELD_COUNT);
    let mut records = tokens.chunks_exact(FIELD_COUNT);

    for (index, fields) in records.by_ref().enumerate() {
        let raw = StringRecord::from(fields.to_vec());
        let record: DbRecord = raw
            .deserialize(None)
            .map_err(|e| LedgerError::parse_error(index + 1, e.to_string()))?;
        let account =
            convert_db_record(record).map_err(|m| LedgerError::parse_error(index + 1, m))?;
        accounts.push(account);
    }

    let leftover = records.remainder();
    if !leftover.is_empty() {
        return Err(LedgerError::parse_error(
            accounts.len() + 1,
            format!(
                "Incomplete record: expected {} fields, found {}",
                FIELD_COUNT,
                leftover.len()
            ),
        ));
    }

    let mut seen = HashSet::new();
    for account in &accounts {
        if !seen.insert(account.number.as_str()) {
            warn!("Duplicate account number {} in database", account.number);
        }
    }

    Ok(accounts)
}

/// Load every account from the database file at `path`
///
/// # Errors
///
/// Returns `DatabaseNotFound` if the file cannot be opened, or a
/// `ParseError` if its contents are malformed.
pub fn load_database(path: &Path) -> Result<Vec<Account>, LedgerError> {
    let file = File::open(path)
        .map_err(|e| LedgerError::database_not_found(&path.display().to_string(), &e))?;

    let accounts = read_accounts(file)?;
    info!("Loaded {} accounts from {}", accounts.len(), path.display());
    Ok(accounts)
}

/// Write accounts in database format
///
/// Writes one space-delimited record per line. Fixed-width numeric fields are
/// zero-padded and balances carry at least two decimal places.
pub fn write_database<W: Write>(accounts: &[Account], output: W) -> Result<(), LedgerError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    for account in accounts {
        writer
            .serialize(DbRecord::from(account))
            .map_err(|e| LedgerError::IoError {
                message: format!("Failed to write account {}: {}", account.number, e),
            })?;
    }

    writer.flush()?;
    Ok(())
}

/// Database file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseFile {
    path: PathBuf,
}

impl DatabaseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DatabaseFile { path: path.into() }
    }

    /// Load the accounts currently stored in this file
    pub fn load(&self) -> Result<Vec<Account>, LedgerError> {
        load_database(&self.path)
    }
}

impl Persist for DatabaseFile {
    /// Write every account to a sibling temporary file, then rename it over
    /// the database so a failed save leaves the previous contents intact
    fn save(&mut self, store: &AccountStore) -> Result<(), LedgerError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        if let Ok(metadata) = fs::metadata(&self.path) {
            file.as_file().set_permissions(metadata.permissions())?;
        }
        write_database(store.accounts(), BufWriter::new(file.as_file_mut()))?;
        file.persist(&self.path).map_err(|e| e.error)?;

        info!("Saved {} accounts to {}", store.len(), self.path.display());
        Ok(())
    }
}
