//! Handler for the format command

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use chronobank_common::{DurationParts, format_signed_duration};

use super::HandlerContext;
use crate::constants::ERR_FORMAT;

#[derive(Debug, Serialize)]
struct FormatOutput {
    seconds: u64,
    formatted: String,
    parts: DurationParts,
}

/// Handle format command
///
/// Negative seconds are rejected rather than clamped.
pub fn handle_format<W: Write>(seconds: i64, ctx: &mut HandlerContext<'_, W>) -> Result<()> {
    let formatted = format_signed_duration(seconds)
        .inspect_err(|e| warn!("Rejected format input: {}", e))
        .context(ERR_FORMAT)?;
    debug!(seconds, %formatted, "Formatted duration");

    // format_signed_duration only succeeds for non-negative input
    let seconds = seconds.unsigned_abs();
    let output = FormatOutput {
        seconds,
        formatted: formatted.clone(),
        parts: DurationParts::from_seconds(seconds),
    };
    ctx.emit(&[formatted], &output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::capture;

    #[test]
    fn test_format_plain() {
        let out = capture(false, |ctx| handle_format(90_061, ctx)).unwrap();
        assert_eq!(out, "1 day, 1 hour, 1 minute, 1 second\n");
    }

    #[test]
    fn test_format_zero() {
        let out = capture(false, |ctx| handle_format(0, ctx)).unwrap();
        assert_eq!(out, "0 seconds\n");
    }

    #[test]
    fn test_format_json() {
        let out = capture(true, |ctx| handle_format(5_400, ctx)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["seconds"], 5_400);
        assert_eq!(value["formatted"], "1 hour, 30 minutes");
        assert_eq!(value["parts"]["hours"], 1);
        assert_eq!(value["parts"]["minutes"], 30);
    }

    #[test]
    fn test_format_negative() {
        let err = capture(false, |ctx| handle_format(-1, ctx)).unwrap_err();
        assert_eq!(err.to_string(), ERR_FORMAT);
        assert_eq!(
            err.root_cause().to_string(),
            "duration cannot be negative (-1 seconds)"
        );
    }
}
