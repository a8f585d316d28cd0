//! Field validators
//!
//! Pure predicates checking that a proposed value for an account field has
//! the required syntax. None of them accepts a missing value: callers hold an
//! `Option<&str>` and treat `None` as its own failure.
//!
//! Letters are ASCII only.

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// Non-empty, alphabetic characters only
pub fn is_name(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Exactly one alphabetic character
pub fn is_middle_initial(value: &str) -> bool {
    value.len() == 1 && is_name(value)
}

/// Exactly 3 decimal digits
pub fn is_area_code(value: &str) -> bool {
    is_digits(value, 3)
}

/// Exactly 7 decimal digits
pub fn is_phone(value: &str) -> bool {
    is_digits(value, 7)
}

/// Exactly 9 decimal digits
pub fn is_social_security(value: &str) -> bool {
    is_digits(value, 9)
}

/// Exactly 6 characters, each an uppercase letter or a digit
pub fn is_password(value: &str) -> bool {
    value.len() == 6
        && value
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Non-negative whole amount: one or more decimal digits
///
/// Fractional amounts are not accepted.
pub fn is_transfer_amount(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
