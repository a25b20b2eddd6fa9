//! Presentation helpers for time-valued fields
//!
//! The account and transaction views show amounts in a few fixed shapes:
//! helper text under a seconds field, and balances in decimal hours.

use crate::duration::format_duration;
use crate::time::SECONDS_PER_HOUR;

/// Prefix of the helper text shown under a numeric seconds field
pub const EQUIVALENT_PREFIX: &str = "Equivalent to: ";

/// Balances strictly below this many seconds (three hours) count as low
pub const LOW_BALANCE_THRESHOLD: u64 = 3 * SECONDS_PER_HOUR;

/// Build the helper text for a numeric seconds field
///
/// The raw field text is trimmed and read as a non-negative integer.
/// Anything else (empty, negative, fractional, or garbage) is shown as zero
/// rather than rejected, since the text is a live preview while typing.
///
/// # Examples
///
/// ```
/// use chronobank_common::display::equivalent_to;
///
/// assert_eq!(equivalent_to("5400"), "Equivalent to: 1 hour, 30 minutes");
/// assert_eq!(equivalent_to(""), "Equivalent to: 0 seconds");
/// ```
#[must_use]
pub fn equivalent_to(field: &str) -> String {
    let seconds = field.trim().parse::<u64>().unwrap_or(0);
    format!("{EQUIVALENT_PREFIX}{}", format_duration(seconds))
}

/// Render an amount in decimal hours with two places (e.g., "2.50 hours")
///
/// The unit is singular only for exactly one hour.
#[must_use]
pub fn format_hours(seconds: u64) -> String {
    let hours = seconds as f64 / SECONDS_PER_HOUR as f64;
    let plural = if seconds == SECONDS_PER_HOUR { "" } else { "s" };
    format!("{hours:.2} hour{plural}")
}

/// Check whether a balance is below [`LOW_BALANCE_THRESHOLD`]
#[must_use]
pub fn is_low_balance(balance: u64) -> bool {
    balance < LOW_BALANCE_THRESHOLD
}
