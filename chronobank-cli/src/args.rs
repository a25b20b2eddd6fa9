//! Command-line argument parsing

use clap::{Parser, Subcommand};

/// ChronoBank time codec
///
/// Converts between seconds and human-readable durations the way the
/// ChronoBank account and transaction views display them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON objects instead of plain text
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Format seconds as a duration (e.g., 90061 -> "1 day, 1 hour, 1 minute, 1 second")
    Format {
        /// Number of seconds (must not be negative)
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },

    /// Parse duration text into seconds (e.g., "2d 3h" -> 183600)
    Parse {
        /// Duration text using d, h, m, and s units
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Show the helper text for a seconds field (e.g., "Equivalent to: 1 hour")
    Hint {
        /// Raw field contents; anything that is not a whole number counts as 0
        #[arg(allow_hyphen_values = true)]
        field: String,
    },

    /// Show a balance in decimal hours and flag low balances
    Hours {
        /// Balance in seconds (a whole, non-negative number)
        #[arg(allow_hyphen_values = true)]
        seconds: String,
    },

    /// Convert between legacy currency and time (1 unit = 1 hour)
    Legacy {
        #[command(subcommand)]
        direction: LegacyDirection,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum LegacyDirection {
    /// Legacy currency amount to seconds
    ToTime {
        /// Amount in legacy currency units
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Seconds to legacy currency amount
    ToCurrency {
        /// Number of seconds
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
}
