//! Duration text validation
//!
//! Validates the free-text duration field (e.g., "1d 2h 3m 4s"). This is
//! length-only; [`parse_duration`](crate::duration::parse_duration) decides
//! what the text means and never rejects it.

use std::fmt;

/// Maximum length for a duration text field in bytes.
///
/// The widest string the formatter produces for a `u64` is
/// "213503982334600 days, 23 hours, 59 minutes, 59 seconds" (54 bytes), so
/// 64 leaves room for hand-typed spacing.
pub const MAX_DURATION_INPUT_LENGTH: usize = 64;

/// Validation error for duration text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationInputError {
    /// Duration text exceeds maximum length
    TooLong,
}

impl fmt::Display for DurationInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "duration text exceeds {MAX_DURATION_INPUT_LENGTH} bytes"),
        }
    }
}

impl std::error::Error for DurationInputError {}

/// Validate duration text (length-only)
///
/// Empty text is valid; it parses to zero seconds.
///
/// # Errors
///
/// Returns [`DurationInputError::TooLong`] past [`MAX_DURATION_INPUT_LENGTH`] bytes.
pub fn validate_duration_input(input: &str) -> Result<(), DurationInputError> {
    if input.len() > MAX_DURATION_INPUT_LENGTH {
        return Err(DurationInputError::TooLong);
    }
    Ok(())
}
