//! Handler for the parse command

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use chronobank_common::validators::validate_duration_input;
use chronobank_common::{DurationParts, format_duration, parse_duration};

use super::HandlerContext;
use crate::constants::ERR_PARSE;

#[derive(Debug, Serialize)]
struct ParseOutput {
    seconds: u64,
    formatted: String,
    parts: DurationParts,
}

/// Handle parse command
///
/// Over-long text is rejected; anything else parses, with unrecognized text
/// counting as zero.
pub fn handle_parse<W: Write>(text: &str, ctx: &mut HandlerContext<'_, W>) -> Result<()> {
    validate_duration_input(text)
        .inspect_err(|e| warn!("Rejected duration text: {}", e))
        .context(ERR_PARSE)?;

    let seconds = parse_duration(text);
    debug!(text, seconds, "Parsed duration");

    let output = ParseOutput {
        seconds,
        formatted: format_duration(seconds),
        parts: DurationParts::from_seconds(seconds),
    };
    ctx.emit(&[seconds.to_string()], &output)
}
