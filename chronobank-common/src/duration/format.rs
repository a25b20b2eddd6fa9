//! Seconds to human-readable duration strings

use std::fmt;

use super::{DurationError, DurationParts};

/// Separator placed between segments ("1 hour, 30 minutes")
const SEGMENT_SEPARATOR: &str = ", ";

/// Format a count of seconds as a human-readable duration
///
/// One segment is emitted per nonzero unit, largest first, and each unit
/// name is pluralized unless its magnitude is exactly 1. Zero renders as
/// `"0 seconds"`, so the result is never empty.
///
/// # Examples
///
/// ```
/// use chronobank_common::format_duration;
///
/// assert_eq!(format_duration(0), "0 seconds");
/// assert_eq!(format_duration(3_661), "1 hour, 1 minute, 1 second");
/// assert_eq!(format_duration(172_800), "2 days");
/// ```
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    DurationParts::from_seconds(seconds).to_string()
}

/// Format a signed count of seconds, rejecting negative values
///
/// # Errors
///
/// Returns [`DurationError::Negative`] when `seconds < 0`.
pub fn format_signed_duration(seconds: i64) -> Result<String, DurationError> {
    let seconds = u64::try_from(seconds).map_err(|_| DurationError::Negative(seconds))?;
    Ok(format_duration(seconds))
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = [
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
        ];

        let mut first = true;
        for (magnitude, unit) in units {
            if magnitude == 0 {
                continue;
            }
            if !first {
                f.write_str(SEGMENT_SEPARATOR)?;
            }
            write_segment(f, magnitude, unit)?;
            first = false;
        }

        // Seconds close out the string when nonzero, or stand alone for zero
        if self.seconds > 0 || first {
            if !first {
                f.write_str(SEGMENT_SEPARATOR)?;
            }
            write_segment(f, self.seconds, "second")?;
        }

        Ok(())
    }
}

fn write_segment(f: &mut fmt::Formatter<'_>, magnitude: u64, unit: &str) -> fmt::Result {
    let plural = if magnitude == 1 { "" } else { "s" };
    write!(f, "{magnitude} {unit}{plural}")
}
