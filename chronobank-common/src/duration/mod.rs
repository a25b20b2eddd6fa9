//! Time-duration codec
//!
//! Converts between a count of seconds and the human-readable duration
//! strings shown next to every time-valued form field:
//!
//! - [`format_duration`] renders `90061` as `"1 day, 1 hour, 1 minute, 1 second"`
//! - [`parse_duration`] reads free-form input such as `"1d 2h 3m 4s"` back into seconds
//!
//! Parsing is lenient: it accepts far more shapes than formatting produces,
//! but `parse_duration(&format_duration(n)) == n` holds for every `n`.

mod format;
mod parse;

use std::fmt;

use serde::Serialize;

use crate::time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

pub use format::{format_duration, format_signed_duration};
pub use parse::parse_duration;

/// A duration split into whole days, hours, minutes, and seconds
///
/// Produced by [`DurationParts::from_seconds`], every field except `days`
/// stays below the size of the next unit up. The `Display` impl renders the
/// same string as [`format_duration`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Decompose a count of seconds, largest unit first
    #[must_use]
    pub fn from_seconds(total: u64) -> Self {
        let days = total / SECONDS_PER_DAY;
        let remainder = total % SECONDS_PER_DAY;
        let hours = remainder / SECONDS_PER_HOUR;
        let remainder = remainder % SECONDS_PER_HOUR;
        let minutes = remainder / SECONDS_PER_MINUTE;
        let seconds = remainder % SECONDS_PER_MINUTE;

        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Recombine into a count of seconds, saturating at `u64::MAX`
    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(SECONDS_PER_DAY)
            .saturating_add(self.hours.saturating_mul(SECONDS_PER_HOUR))
            .saturating_add(self.minutes.saturating_mul(SECONDS_PER_MINUTE))
            .saturating_add(self.seconds)
    }
}

/// Error returned when a value cannot be rendered as a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationError {
    /// Durations are counts of elapsed time and are never negative
    Negative(i64),
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(value) => write!(f, "duration cannot be negative ({value} seconds)"),
        }
    }
}

impl std::error::Error for DurationError {}
