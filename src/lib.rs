//! # Logician
//!
//! Logician configures the verbosity of loggers from several prioritized sources: explicit
//! values, level suppliers, and environment variables. Sources are layered as a chain of
//! configurator decorators, each one resolving a level and handing it down to the configurator it
//! wraps, until the sink at the bottom applies it to a logger.
//!
//! - [`configurators`] holds the contracts and the decorators.
//! - [`subscriber`] holds the `tracing-subscriber` based sink.
//! - [`level`] holds the [`level::LogLevel`] value type that flows through a chain.

pub mod configurators;
pub mod exceptions;
pub mod level;
pub mod logging;
pub mod settings;
pub mod subscriber;

pub use configurators::{
    EnvListLoggerConfigurator, HasUnderlyingConfigurator, LevelLoggerConfigurator, LevelTarget,
    ListLoggerConfigurator, LoggerConfigurator, SupplierLoggerConfigurator,
    VtEnvListLoggerConfigurator,
};
pub use exceptions::{LogicianError, LogicianResult};
pub use level::LogLevel;
pub use subscriber::{ConfiguredLogger, FmtLoggerConfigurator, LogStream, Logger};
