//! Human-readable duration strings to seconds

use std::sync::LazyLock;

use regex::Regex;

use crate::time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// One token pattern per unit, paired with the unit size in seconds
///
/// Digits and unit letters are ASCII only; `(?i)` would also fold in
/// letters such as U+017F for `s`. A minutes marker directly followed by `s`
/// is not a minutes token, so `"5ms"` contributes nothing.
static UNIT_PATTERNS: LazyLock<[(Regex, u64); 4]> = LazyLock::new(|| {
    [
        (token_regex(r"([0-9]+)\s*[dD]"), SECONDS_PER_DAY),
        (token_regex(r"([0-9]+)\s*[hH]"), SECONDS_PER_HOUR),
        (token_regex(r"([0-9]+)\s*[mM](?:[^sS]|$)"), SECONDS_PER_MINUTE),
        (token_regex(r"([0-9]+)\s*[sS]"), 1),
    ]
});

fn token_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid duration token pattern")
}

/// Parse a free-form duration string into seconds
///
/// Each unit (`d`, `h`, `m`, `s`, any case) is looked up once: the first
/// `<digits><optional whitespace><unit>` token for that unit counts, later
/// ones are ignored. Anything unrecognized contributes nothing, so this
/// never fails and returns 0 when no token is found.
///
/// Digit runs too large for a `u64` saturate, as does the running total.
///
/// # Examples
///
/// ```
/// use chronobank_common::parse_duration;
///
/// assert_eq!(parse_duration("2d 3h"), 183_600);
/// assert_eq!(parse_duration("1 hour, 30 minutes"), 5_400);
/// assert_eq!(parse_duration("5ms"), 0);
/// assert_eq!(parse_duration("no units here"), 0);
/// ```
#[must_use]
pub fn parse_duration(input: &str) -> u64 {
    UNIT_PATTERNS
        .iter()
        .filter_map(|(pattern, unit_seconds)| {
            let digits = pattern.captures(input)?.get(1)?.as_str();
            Some(magnitude(digits).saturating_mul(*unit_seconds))
        })
        .fold(0, u64::saturating_add)
}

/// Digit runs are pure ASCII, so the only parse failure is overflow
fn magnitude(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
