//! Seconds field validation
//!
//! Strict reading of a numeric seconds field, for submission. The live
//! helper text uses the lenient [`equivalent_to`](crate::display::equivalent_to)
//! instead.

use std::fmt;

/// Validation error for a seconds field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondsFieldError {
    /// Field is empty or whitespace
    Empty,
    /// Field holds a negative integer
    Negative,
    /// Field is not a non-negative integer that fits in 64 bits
    Invalid,
}

impl fmt::Display for SecondsFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("seconds field is empty"),
            Self::Negative => f.write_str("seconds cannot be negative"),
            Self::Invalid => f.write_str("seconds must be a whole number"),
        }
    }
}

impl std::error::Error for SecondsFieldError {}

/// Validate and read a seconds field
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns a `SecondsFieldError` variant describing the validation failure.
pub fn validate_seconds_field(input: &str) -> Result<u64, SecondsFieldError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SecondsFieldError::Empty);
    }
    if let Some(digits) = input.strip_prefix('-')
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(SecondsFieldError::Negative);
    }
    input.parse().map_err(|_| SecondsFieldError::Invalid)
}
