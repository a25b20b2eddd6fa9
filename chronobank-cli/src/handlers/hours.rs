//! Handler for the hours command

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use chronobank_common::display::{LOW_BALANCE_THRESHOLD, format_hours, is_low_balance};
use chronobank_common::format_duration;
use chronobank_common::validators::validate_seconds_field;

use super::HandlerContext;
use crate::constants::{ERR_BALANCE, MSG_LOW_BALANCE};

#[derive(Debug, Serialize)]
struct HoursOutput {
    seconds: u64,
    hours: String,
    low_balance: bool,
}

/// Handle hours command
///
/// The balance field is read strictly. Balances under the low-balance
/// threshold get a warning line after the hours figure.
pub fn handle_hours<W: Write>(field: &str, ctx: &mut HandlerContext<'_, W>) -> Result<()> {
    let seconds = validate_seconds_field(field)
        .inspect_err(|e| warn!("Rejected balance {:?}: {}", field, e))
        .context(ERR_BALANCE)?;

    let hours = format_hours(seconds);
    let low_balance = is_low_balance(seconds);
    debug!(seconds, %hours, low_balance, "Formatted balance");

    let mut lines = vec![hours.clone()];
    if low_balance {
        warn!(seconds, "Balance below low-balance threshold");
        lines.push(format!(
            "{}{}",
            MSG_LOW_BALANCE,
            format_duration(LOW_BALANCE_THRESHOLD)
        ));
    }

    let output = HoursOutput {
        seconds,
        hours,
        low_balance,
    };
    ctx.emit(&lines, &output)
}
