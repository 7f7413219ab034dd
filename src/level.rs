//! ## Log levels
//!
//! [`LogLevel`] is the level value that flows through a configurator chain. It keeps the raw token
//! it was built from (a name such as `"debug"` or a severity rank such as `"10"`), because levels
//! usually arrive as strings from environment variables and are only interpreted by the sink that
//! finally applies them.

use std::fmt;
use tracing::level_filters::LevelFilter;
use tracing::Level;

/// Level names accepted by [`LogLevel::to_filter`], listed from most to least verbose.
pub const LEVEL_NAMES: &[&str] = &[
    "TRACE", "DEBUG", "INFO", "SUCCESS", "NOTICE", "WARNING", "WARN", "ERROR", "CRITICAL", "FATAL",
    "OFF",
];

/// A log level token, interpreted lazily.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogLevel(String);

impl LogLevel {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the token into a `tracing` level filter.
    ///
    /// Names are matched case-insensitively. Numeric tokens are read on the severity-rank scale
    /// (`5` trace, `10` debug, `20` info, `30` warning, `40` error, `50` critical), where a logger
    /// set to rank `n` lets through every record of rank `n` and above; `0` lets everything through.
    ///
    /// Returns `None` for tokens that name no known level.
    pub fn to_filter(&self) -> Option<LevelFilter> {
        let token = self.0.trim();
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            // all digits, so the parse only fails on overflow
            return Some(token.parse::<u32>().map_or(LevelFilter::ERROR, rank_to_filter));
        }
        match token.to_ascii_uppercase().as_str() {
            "TRACE" => Some(LevelFilter::TRACE),
            "DEBUG" => Some(LevelFilter::DEBUG),
            "INFO" | "SUCCESS" | "NOTICE" => Some(LevelFilter::INFO),
            "WARN" | "WARNING" => Some(LevelFilter::WARN),
            "ERROR" | "CRITICAL" | "FATAL" => Some(LevelFilter::ERROR),
            "OFF" => Some(LevelFilter::OFF),
            _ => None,
        }
    }
}

fn rank_to_filter(rank: u32) -> LevelFilter {
    match rank {
        0..=5 => LevelFilter::TRACE,
        6..=10 => LevelFilter::DEBUG,
        // success (25) and notice (27) have no tracing counterpart and surface as info
        11..=29 => LevelFilter::INFO,
        30 => LevelFilter::WARN,
        _ => LevelFilter::ERROR,
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for LogLevel {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for LogLevel {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        Self(level.as_str().to_string())
    }
}

impl From<LevelFilter> for LogLevel {
    fn from(filter: LevelFilter) -> Self {
        Self(filter.to_string())
    }
}
