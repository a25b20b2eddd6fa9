//! Unit sizes for time-denominated amounts
//!
//! Account balances and transaction amounts are stored as whole seconds.
//! These are the divisors the codec splits them by and the multipliers the
//! parser and the legacy currency rate scale by.

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds in one hour, also the value of one legacy currency unit
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Seconds in one day, the largest unit a formatted duration shows
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_sizes() {
        assert_eq!(SECONDS_PER_MINUTE, 60);
        assert_eq!(SECONDS_PER_HOUR, 3_600);
        assert_eq!(SECONDS_PER_DAY, 86_400);
    }
}
