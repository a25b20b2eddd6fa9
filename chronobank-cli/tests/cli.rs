//! Integration tests for the command-line front end
//!
//! These drive the full path from raw arguments through clap and the
//! handlers to the bytes written on stdout.

use chronobank_cli::args::Args;
use chronobank_cli::constants::{ERR_BALANCE, ERR_FORMAT, ERR_LEGACY, ERR_PARSE};
use chronobank_common::{format_duration, parse_duration};
use clap::Parser;

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse `argv` and run it, returning stdout on success
fn run_cli(argv: &[&str]) -> anyhow::Result<String> {
    let args = Args::try_parse_from(std::iter::once("chronobank").chain(argv.iter().copied()))?;
    let mut out = Vec::new();
    chronobank_cli::run(&args, &mut out)?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

fn run_json(argv: &[&str]) -> serde_json::Value {
    let mut argv = argv.to_vec();
    argv.push("--json");
    let out = run_cli(&argv).expect("command succeeds");
    serde_json::from_str(&out).expect("output is one JSON object")
}

// ============================================================================
// Format / Parse
// ============================================================================

#[test]
fn test_format_examples() {
    assert_eq!(run_cli(&["format", "0"]).unwrap(), "0 seconds\n");
    assert_eq!(run_cli(&["format", "1"]).unwrap(), "1 second\n");
    assert_eq!(run_cli(&["format", "2"]).unwrap(), "2 seconds\n");
    assert_eq!(run_cli(&["format", "86400"]).unwrap(), "1 day\n");
    assert_eq!(
        run_cli(&["format", "3661"]).unwrap(),
        "1 hour, 1 minute, 1 second\n"
    );
}

#[test]
fn test_format_negative_fails() {
    let err = run_cli(&["format", "-30"]).unwrap_err();
    assert_eq!(err.to_string(), ERR_FORMAT);
}

#[test]
fn test_parse_examples() {
    assert_eq!(run_cli(&["parse", "2d 3h"]).unwrap(), "183600\n");
    assert_eq!(run_cli(&["parse", "5m"]).unwrap(), "300\n");
    assert_eq!(run_cli(&["parse", "5ms"]).unwrap(), "0\n");
    assert_eq!(run_cli(&["parse", ""]).unwrap(), "0\n");
    assert_eq!(run_cli(&["parse", "no units here"]).unwrap(), "0\n");
}

#[test]
fn test_parse_text_with_leading_hyphen() {
    assert_eq!(run_cli(&["parse", "-2h"]).unwrap(), "7200\n");
    assert_eq!(run_cli(&["parse", "-"]).unwrap(), "0\n");
}

#[test]
fn test_parse_too_long_fails() {
    let text = "9".repeat(100);
    let err = run_cli(&["parse", &text]).unwrap_err();
    assert_eq!(err.to_string(), ERR_PARSE);
}

#[test]
fn test_format_output_parses_back() {
    for seconds in [0u64, 59, 3_600, 90_061, 1_234_567] {
        let formatted = run_cli(&["format", &seconds.to_string()]).unwrap();
        let parsed = run_cli(&["parse", formatted.trim_end()]).unwrap();
        assert_eq!(parsed, format!("{seconds}\n"));
    }
}

#[test]
fn test_format_and_parse_json_agree() {
    let formatted = run_json(&["format", "93784"]);
    let parsed = run_json(&["parse", "1d 2h 3m 4s"]);
    assert_eq!(formatted, parsed);
    assert_eq!(
        formatted["formatted"],
        format_duration(parse_duration("1d 2h 3m 4s"))
    );
}

// ============================================================================
// Display Helpers
// ============================================================================

#[test]
fn test_hint() {
    assert_eq!(
        run_cli(&["hint", "5400"]).unwrap(),
        "Equivalent to: 1 hour, 30 minutes\n"
    );
    assert_eq!(
        run_cli(&["hint", "not a number"]).unwrap(),
        "Equivalent to: 0 seconds\n"
    );
    assert_eq!(
        run_cli(&["hint", "-5"]).unwrap(),
        "Equivalent to: 0 seconds\n"
    );
}

#[test]
fn test_hours() {
    assert_eq!(run_cli(&["hours", "18000"]).unwrap(), "5.00 hours\n");

    let value = run_json(&["hours", "0"]);
    assert_eq!(value["hours"], "0.00 hours");
    assert_eq!(value["low_balance"], true);
}

#[test]
fn test_hours_rejects_bad_field() {
    for field in ["", "-1", "1.5", "3h"] {
        let err = run_cli(&["hours", field]).unwrap_err();
        assert_eq!(err.to_string(), ERR_BALANCE, "{field:?}");
    }
}

// ============================================================================
// Legacy Conversion
// ============================================================================

#[test]
fn test_legacy_round_trip() {
    assert_eq!(run_cli(&["legacy", "to-time", "2.5"]).unwrap(), "9000\n");
    assert_eq!(
        run_cli(&["legacy", "to-currency", "9000"]).unwrap(),
        "2.50\n"
    );
}

#[test]
fn test_legacy_negative_amount() {
    assert_eq!(run_cli(&["legacy", "to-time", "-1"]).unwrap(), "-3600\n");
}

#[test]
fn test_legacy_out_of_range_fails() {
    let err = run_cli(&["legacy", "to-time", "1e300"]).unwrap_err();
    assert_eq!(err.to_string(), ERR_LEGACY);
}
