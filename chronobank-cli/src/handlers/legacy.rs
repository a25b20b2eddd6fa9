//! Handlers for the legacy conversion commands

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use chronobank_common::legacy::{currency_to_seconds, seconds_to_currency};

use super::HandlerContext;
use crate::constants::ERR_LEGACY;

#[derive(Debug, Serialize)]
struct LegacyOutput {
    seconds: i64,
    currency: f64,
}

/// Handle legacy to-time command
pub fn handle_legacy_to_time<W: Write>(
    amount: f64,
    ctx: &mut HandlerContext<'_, W>,
) -> Result<()> {
    let seconds = currency_to_seconds(amount)
        .inspect_err(|e| warn!("Rejected legacy amount {}: {}", amount, e))
        .context(ERR_LEGACY)?;
    debug!(amount, seconds, "Converted legacy currency to time");

    let output = LegacyOutput {
        seconds,
        currency: amount,
    };
    ctx.emit(&[seconds.to_string()], &output)
}

/// Handle legacy to-currency command
pub fn handle_legacy_to_currency<W: Write>(
    seconds: i64,
    ctx: &mut HandlerContext<'_, W>,
) -> Result<()> {
    let currency = seconds_to_currency(seconds);
    debug!(seconds, currency, "Converted time to legacy currency");

    let output = LegacyOutput { seconds, currency };
    ctx.emit(&[format!("{currency:.2}")], &output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::capture;

    #[test]
    fn test_to_time() {
        let out = capture(false, |ctx| handle_legacy_to_time(1.5, ctx)).unwrap();
        assert_eq!(out, "5400\n");
    }

    #[test]
    fn test_to_time_not_finite() {
        let err = capture(false, |ctx| handle_legacy_to_time(f64::NAN, ctx)).unwrap_err();
        assert_eq!(err.to_string(), ERR_LEGACY);
    }

    #[test]
    fn test_to_currency() {
        let out = capture(false, |ctx| handle_legacy_to_currency(5_400, ctx)).unwrap();
        assert_eq!(out, "1.50\n");
    }

    #[test]
    fn test_to_currency_json() {
        let out = capture(true, |ctx| handle_legacy_to_currency(-1_800, ctx)).unwrap();
        assert_eq!(out, "{\"seconds\":-1800,\"currency\":-0.5}\n");
    }
}
