//! Legacy currency conversion
//!
//! Accounts imported from the pre-time banking system carry balances in a
//! monetary unit. One legacy unit is worth exactly one hour.

use std::fmt;

use crate::time::SECONDS_PER_HOUR;

/// Seconds credited per legacy currency unit
pub const SECONDS_PER_CURRENCY_UNIT: u64 = SECONDS_PER_HOUR;

/// Error converting a legacy amount into seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyError {
    /// Amount is NaN or infinite
    NotFinite,
    /// Converted amount does not fit in an `i64` count of seconds
    OutOfRange,
}

impl fmt::Display for LegacyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite => f.write_str("currency amount must be a finite number"),
            Self::OutOfRange => f.write_str("currency amount is too large to convert"),
        }
    }
}

impl std::error::Error for LegacyError {}

/// Convert a legacy currency amount into seconds, truncating toward zero
///
/// Negative amounts (debts) convert to negative seconds.
///
/// # Errors
///
/// Returns [`LegacyError::NotFinite`] for NaN or infinite input and
/// [`LegacyError::OutOfRange`] when the result does not fit in an `i64`.
pub fn currency_to_seconds(amount: f64) -> Result<i64, LegacyError> {
    if !amount.is_finite() {
        return Err(LegacyError::NotFinite);
    }

    let seconds = (amount * SECONDS_PER_CURRENCY_UNIT as f64).trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if seconds < i64::MIN as f64 || seconds >= i64::MAX as f64 {
        return Err(LegacyError::OutOfRange);
    }
    Ok(seconds as i64)
}

/// Convert seconds into legacy currency units
#[must_use]
pub fn seconds_to_currency(seconds: i64) -> f64 {
    seconds as f64 / SECONDS_PER_CURRENCY_UNIT as f64
}
