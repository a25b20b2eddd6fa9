//! ChronoBank CLI Library
//!
//! This library exposes the command-line front end's modules for
//! integration testing.

pub mod args;
pub mod constants;
pub mod handlers;
pub mod logging;

use std::io::Write;

use anyhow::Result;

use args::{Args, Command, LegacyDirection};
use handlers::HandlerContext;

/// Dispatch a parsed command line to its handler, writing results to `out`
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let mut ctx = HandlerContext::new(out, args.json);

    match &args.command {
        Command::Format { seconds } => handlers::handle_format(*seconds, &mut ctx),
        Command::Parse { text } => handlers::handle_parse(text, &mut ctx),
        Command::Hint { field } => handlers::handle_hint(field, &mut ctx),
        Command::Hours { seconds } => handlers::handle_hours(seconds, &mut ctx),
        Command::Legacy { direction } => match direction {
            LegacyDirection::ToTime { amount } => {
                handlers::handle_legacy_to_time(*amount, &mut ctx)
            }
            LegacyDirection::ToCurrency { seconds } => {
                handlers::handle_legacy_to_currency(*seconds, &mut ctx)
            }
        },
    }
}
