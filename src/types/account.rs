//! Account-related types for the bank account ledger
//!
//! This module defines the Account structure and the bounded string
//! types used for its fixed-capacity text fields.

use super::error::FieldError;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::Deref;

/// Maximum length of a first or last name
pub const NAME_LENGTH: usize = 50;

/// Maximum length of an account number
pub const ACCOUNT_NUMBER_LENGTH: usize = 5;

/// Maximum length of an account password
pub const PASSWORD_LENGTH: usize = 6;

/// An owned string holding at most `N` characters
///
/// Construction fails with [`FieldError::TooLong`] instead of truncating,
/// so a value that fits today can never be silently shortened on write.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BoundedString<const N: usize>(String);

impl<const N: usize> BoundedString<N> {
    /// Create a bounded string, rejecting values longer than `N` characters
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        let len = value.chars().count();
        if len > N {
            return Err(FieldError::TooLong { max: N, len });
        }
        Ok(BoundedString(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> Deref for BoundedString<N> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> fmt::Display for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width and alignment flags apply to the inner text
        fmt::Display::fmt(&self.0, f)
    }
}

impl<const N: usize> PartialEq<str> for BoundedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// First or last name of an account holder
pub type Name = BoundedString<NAME_LENGTH>;

/// Account identifier, unique within a database
pub type AccountNumber = BoundedString<ACCOUNT_NUMBER_LENGTH>;

/// Account credential
pub type Password = BoundedString<PASSWORD_LENGTH>;

/// One bank customer record
///
/// Numeric fixed-width fields (area code, phone, SSN) are stored as integers
/// and rendered zero-padded to their canonical width.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub last: Name,
    pub first: Name,
    pub middle: char,

    /// Social security number (9 digits)
    pub social: u32,

    /// Area code (3 digits)
    pub area: u16,

    /// Phone number without area code (7 digits)
    pub phone: u32,

    /// Current balance; never negative after a transfer
    pub balance: Decimal,

    pub number: AccountNumber,
    pub password: Password,
}

impl Account {
    /// Whether this account is authenticated by the given credentials
    pub fn matches(&self, number: &str, password: &str) -> bool {
        self.number == *number && self.password == *password
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("", true)]
    #[case::exact_capacity("A0001", true)]
    #[case::one_over("A00012", false)]
    fn test_account_number_capacity(#[case] value: &str, #[case] accepted: bool) {
        assert_eq!(AccountNumber::new(value).is_ok(), accepted);
    }

    #[test]
    fn test_overflow_is_rejected_not_truncated() {
        let long = "A".repeat(NAME_LENGTH + 1);
        let err = Name::new(long).unwrap_err();
        assert_eq!(
            err,
            FieldError::TooLong {
                max: NAME_LENGTH,
                len: NAME_LENGTH + 1
            }
        );
    }

    #[test]
    fn test_display_honors_width() {
        let name = Name::new("Smith").unwrap();
        assert_eq!(format!("[{:<8}]", name), "[Smith   ]");
    }

    #[test]
    fn test_matches_requires_both_credentials() {
        let account = Account {
            last: Name::new("Smith").unwrap(),
            first: Name::new("John").unwrap(),
            middle: 'Q',
            social: 123456789,
            area: 555,
            phone: 1234567,
            balance: Decimal::new(10000, 2),
            number: AccountNumber::new("A0001").unwrap(),
            password: Password::new("SECRT1").unwrap(),
        };

        assert!(account.matches("A0001", "SECRT1"));
        assert!(!account.matches("A0001", "SECRT2"));
        assert!(!account.matches("A0002", "SECRT1"));
        assert!(!account.matches("A000", "SECRT1"));
    }
}
