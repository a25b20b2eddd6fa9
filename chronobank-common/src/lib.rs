//! ChronoBank Common Library
//!
//! The time-duration codec and the presentation helpers built on it.
//! ChronoBank accounts hold time instead of money, so every balance and
//! transaction amount is a count of seconds that has to be shown to (and
//! read back from) people.

pub mod display;
pub mod duration;
pub mod legacy;
pub mod time;
pub mod validators;

pub use duration::{
    DurationError, DurationParts, format_duration, format_signed_duration, parse_duration,
};
