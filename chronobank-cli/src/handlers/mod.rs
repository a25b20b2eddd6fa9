//! Command handlers
//!
//! Each handler reads its input from the parsed arguments, runs the codec,
//! and writes either plain text or one JSON object to the output.

mod format;
mod hint;
mod hours;
mod legacy;
mod parse;

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::constants::ERR_WRITE_OUTPUT;

pub use format::handle_format;
pub use hint::handle_hint;
pub use hours::handle_hours;
pub use legacy::{handle_legacy_to_currency, handle_legacy_to_time};
pub use parse::handle_parse;

/// Output sink plus the formatting choice shared by every handler
pub struct HandlerContext<'a, W: Write> {
    pub out: &'a mut W,
    pub json: bool,
}

impl<'a, W: Write> HandlerContext<'a, W> {
    pub fn new(out: &'a mut W, json: bool) -> Self {
        Self { out, json }
    }

    /// Write `lines` as plain text, or `value` as a single JSON line
    pub fn emit<T: Serialize>(&mut self, lines: &[String], value: &T) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut *self.out, value).context(ERR_WRITE_OUTPUT)?;
            writeln!(self.out).context(ERR_WRITE_OUTPUT)?;
        } else {
            for line in lines {
                writeln!(self.out, "{line}").context(ERR_WRITE_OUTPUT)?;
            }
        }
        Ok(())
    }
}
