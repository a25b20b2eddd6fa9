//! Handler for the hint command

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use chronobank_common::display::equivalent_to;

use super::HandlerContext;

#[derive(Debug, Serialize)]
struct HintOutput<'a> {
    field: &'a str,
    hint: String,
}

/// Handle hint command
pub fn handle_hint<W: Write>(field: &str, ctx: &mut HandlerContext<'_, W>) -> Result<()> {
    let hint = equivalent_to(field);
    debug!(field, %hint, "Built helper text");

    let output = HintOutput {
        field,
        hint: hint.clone(),
    };
    ctx.emit(&[hint], &output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::capture;

    #[test]
    fn test_hint_plain() {
        let out = capture(false, |ctx| handle_hint("5400", ctx)).unwrap();
        assert_eq!(out, "Equivalent to: 1 hour, 30 minutes\n");
    }

    #[test]
    fn test_hint_garbage_is_zero() {
        let out = capture(false, |ctx| handle_hint("-20", ctx)).unwrap();
        assert_eq!(out, "Equivalent to: 0 seconds\n");
    }

    #[test]
    fn test_hint_json() {
        let out = capture(true, |ctx| handle_hint("60", ctx)).unwrap();
        assert_eq!(out, "{\"field\":\"60\",\"hint\":\"Equivalent to: 1 minute\"}\n");
    }
}
