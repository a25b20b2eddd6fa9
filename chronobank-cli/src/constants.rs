//! User-facing message strings

/// Prefix of the warning printed under a low balance
pub const MSG_LOW_BALANCE: &str = "Warning: balance is below ";

/// Log directive used when --debug is passed
pub const DEBUG_LOG_DIRECTIVE: &str = "debug";

/// Log directive used when neither --debug nor RUST_LOG is set
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Context attached when a duration cannot be formatted
pub const ERR_FORMAT: &str = "Cannot format duration";

/// Context attached when duration text is rejected before parsing
pub const ERR_PARSE: &str = "Cannot parse duration text";

/// Context attached when a balance field is rejected
pub const ERR_BALANCE: &str = "Invalid balance";

/// Context attached when a legacy amount cannot be converted
pub const ERR_LEGACY: &str = "Cannot convert legacy amount";

/// Context attached when output cannot be written
pub const ERR_WRITE_OUTPUT: &str = "Failed to write output";
