/// Plugin identifier reported to the host
pub const PLUGIN_ID: &str = "hook-logger";

/// Human-readable plugin name
pub const PLUGIN_NAME: &str = "hook-logger";

pub const PLUGIN_DESCRIPTION: &str = "Log all hook stages for debugging";

/// Prefix for every diagnostic line written to stdout/stderr
pub(crate) const DIAG_PREFIX: &str = "[hook-logger]";

/// Date stem used for log file names: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Extension of the per-day log files
pub(crate) const LOG_EXTENSION: &str = "log";

/// Number of days a log file is kept after its last write
pub const MAX_DAYS: u32 = 3;

/// Limit for prompt and message text fields
pub(crate) const TEXT_LIMIT: usize = 100;

/// Limit for JSON-encoded tool arguments and results
pub(crate) const TOOL_PAYLOAD_LIMIT: usize = 200;

/// Placeholder for `messagesCount` when the payload has no message list
pub(crate) const UNKNOWN: &str = "unknown";
