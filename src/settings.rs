//! ## Settings
//!
//! Fixed names and defaults shared across the crate.

use crate::level::LogLevel;
use tracing::Level;

/// Catch-all environment variable consulted last by [`crate::configurators::VtEnvListLoggerConfigurator`].
pub const VT_ALL_LOG_ENV_VAR: &str = "VT_ALL_LOG";

/// Environment variable that turns on the crate's own debug logging (see [`crate::logging`]).
pub const DEBUG_ENV_VAR: &str = "DEBUG_LOGICIAN";

/// Level used by sinks when no level was set, or when the set level cannot be resolved.
pub const DEFAULT_LOG_LEVEL: Level = Level::WARN;

/// Returns [`DEFAULT_LOG_LEVEL`] as a [`LogLevel`].
pub fn default_log_level() -> LogLevel {
    LogLevel::from(DEFAULT_LOG_LEVEL)
}
