//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::constants::{DEBUG_LOG_DIRECTIVE, DEFAULT_LOG_DIRECTIVE};

/// Build the log filter: `--debug` wins, then `RUST_LOG`, then `info`
pub fn env_filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new(DEBUG_LOG_DIRECTIVE);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// Install the global subscriber, writing to stderr so stdout stays parseable
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
