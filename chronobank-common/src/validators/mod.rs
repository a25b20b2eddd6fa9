//! Input validation functions
//!
//! Validators for the two form fields the duration codec is wired to. The
//! codec itself is lenient; these are for callers that need to reject bad
//! input before it reaches an account or transaction.

mod duration_input;
mod seconds_field;

pub use duration_input::{DurationInputError, MAX_DURATION_INPUT_LENGTH, validate_duration_input};
pub use seconds_field::{SecondsFieldError, validate_seconds_field};
