//! ## tracing-subscriber sink
//!
//! [`FmtLoggerConfigurator`] is the configurator that sits at the bottom of a decorator chain. It
//! holds a settable [`LogLevel`] and turns a named [`Logger`] handle into a [`ConfiguredLogger`]:
//! a `tracing_subscriber::fmt` subscriber filtered at that level.
//!
//! Levels that cannot be resolved fall back to `WARN`, with a warning naming the logger and the
//! accepted level names (unless `no_warn` is set).
//!
//! Output goes to stderr unless other [`LogStream`]s are given. An empty stream list is accepted and
//! means the logger writes nowhere.

use crate::configurators::{LevelTarget, LoggerConfigurator};
use crate::exceptions::LogicianResult;
use crate::level::{LogLevel, LEVEL_NAMES};
use crate::settings::{default_log_level, DEFAULT_LOG_LEVEL};
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

/// An output stream a configured logger writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogStream {
    Stdout,
    Stderr,
}

impl LogStream {
    fn make_writer(self) -> BoxMakeWriter {
        match self {
            LogStream::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogStream::Stderr => BoxMakeWriter::new(std::io::stderr),
        }
    }
}

/// Builds a writer that copies every record to each of `streams`, or discards it if there are none.
fn make_writer(streams: &[LogStream]) -> BoxMakeWriter {
    streams
        .iter()
        .map(|stream| stream.make_writer())
        .reduce(|all, next| BoxMakeWriter::new(all.and(next)))
        .unwrap_or_else(|| BoxMakeWriter::new(std::io::sink))
}

/// Which fields a record is printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RecordFormat {
    time: bool,
    target: bool,
    file: bool,
    line_number: bool,
}

impl RecordFormat {
    /// The more verbose the level, the more detail each record carries.
    fn for_level(level: LevelFilter) -> Self {
        let detail = level >= LevelFilter::DEBUG;
        Self {
            time: level >= LevelFilter::TRACE,
            target: level >= LevelFilter::INFO,
            file: detail,
            line_number: detail,
        }
    }
}

/// A named logger handle, the input of [`FmtLoggerConfigurator::configure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    name: String,
}

impl Logger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A logger with its level applied and a subscriber ready to receive its events.
#[derive(Clone)]
pub struct ConfiguredLogger {
    name: String,
    level: LevelFilter,
    dispatch: Dispatch,
}

impl ConfiguredLogger {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The level filter the subscriber was built with.
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Runs `f` with this logger's subscriber as the current thread's default.
    pub fn in_scope<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Installs this logger's subscriber as the process-wide default.
    ///
    /// # Returns
    ///
    /// * `LogicianResult<()>` - A `GlobalDefaultSubscriber` error if a global default is already set.
    pub fn init(self) -> LogicianResult<()> {
        tracing::dispatcher::set_global_default(self.dispatch)?;
        Ok(())
    }
}

impl std::fmt::Debug for ConfiguredLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredLogger")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

/// Configures loggers through `tracing_subscriber::fmt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FmtLoggerConfigurator {
    level: LogLevel,
    no_warn: bool,
    with_target: bool,
    with_thread_ids: bool,
    with_thread_names: bool,
    with_line_number: bool,
    with_ansi: bool,
    streams: Vec<LogStream>,
    diff_fmt_per_level: bool,
}

impl Default for FmtLoggerConfigurator {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            no_warn: false,
            with_target: true,
            with_thread_ids: false,
            with_thread_names: false,
            with_line_number: false,
            with_ansi: true,
            streams: vec![LogStream::Stderr],
            diff_fmt_per_level: false,
        }
    }
}

impl FmtLoggerConfigurator {
    /// Creates a configurator with the default `WARNING` level.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: impl Into<LogLevel>) -> Self {
        self.level = level.into();
        self
    }

    /// Do not warn when the level cannot be resolved.
    pub fn with_no_warn(mut self, no_warn: bool) -> Self {
        self.no_warn = no_warn;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    pub fn with_thread_ids(mut self, with_thread_ids: bool) -> Self {
        self.with_thread_ids = with_thread_ids;
        self
    }

    pub fn with_thread_names(mut self, with_thread_names: bool) -> Self {
        self.with_thread_names = with_thread_names;
        self
    }

    pub fn with_line_number(mut self, with_line_number: bool) -> Self {
        self.with_line_number = with_line_number;
        self
    }

    pub fn with_ansi(mut self, with_ansi: bool) -> Self {
        self.with_ansi = with_ansi;
        self
    }

    /// Streams every record is written to. An empty list discards all output.
    pub fn with_streams(mut self, streams: impl IntoIterator<Item = LogStream>) -> Self {
        self.streams = streams.into_iter().collect();
        self
    }

    /// Pick the record format from the resolved level instead of the `with_target` and
    /// `with_line_number` switches: timestamps at `TRACE`, source locations from `DEBUG`, the
    /// target from `INFO`, and the bare level and message above that.
    pub fn with_diff_fmt_per_level(mut self, diff_fmt_per_level: bool) -> Self {
        self.diff_fmt_per_level = diff_fmt_per_level;
        self
    }

    pub fn no_warn(&self) -> bool {
        self.no_warn
    }

    pub fn streams(&self) -> &[LogStream] {
        &self.streams
    }

    pub fn diff_fmt_per_level(&self) -> bool {
        self.diff_fmt_per_level
    }

    fn record_format(&self, level: LevelFilter) -> RecordFormat {
        if self.diff_fmt_per_level {
            RecordFormat::for_level(level)
        } else {
            RecordFormat {
                time: true,
                target: self.with_target,
                file: false,
                line_number: self.with_line_number,
            }
        }
    }

    /// Resolves the current level, falling back to `WARN` for undefined levels.
    fn effective_level(&self, logger: &Logger) -> LevelFilter {
        match self.level.to_filter() {
            Some(filter) => filter,
            None => {
                if !self.no_warn {
                    tracing::warn!(
                        "{}: Undefined log level '{}'. Choose from {:?}.",
                        logger.name(),
                        self.level,
                        LEVEL_NAMES
                    );
                    tracing::warn!(
                        "{}: Setting log level to default: '{}'.",
                        logger.name(),
                        DEFAULT_LOG_LEVEL
                    );
                }
                LevelFilter::from_level(DEFAULT_LOG_LEVEL)
            }
        }
    }
}

impl LevelTarget<LogLevel> for FmtLoggerConfigurator {
    fn level(&self) -> &LogLevel {
        &self.level
    }

    fn set_level(&mut self, new_level: LogLevel) -> LogLevel {
        std::mem::replace(&mut self.level, new_level)
    }
}

impl LoggerConfigurator for FmtLoggerConfigurator {
    type Logger = Logger;
    type Configured = ConfiguredLogger;
    type Overrides = FmtOverrides;

    fn configure(&mut self, logger: Logger) -> LogicianResult<ConfiguredLogger> {
        let level = self.effective_level(&logger);
        let format = self.record_format(level);
        let builder = tracing_subscriber::fmt()
            .with_writer(make_writer(&self.streams))
            .with_max_level(level)
            .with_target(format.target)
            .with_file(format.file)
            .with_line_number(format.line_number)
            .with_thread_ids(self.with_thread_ids)
            .with_thread_names(self.with_thread_names)
            .with_ansi(self.with_ansi);
        let dispatch = if format.time {
            Dispatch::new(builder.finish())
        } else {
            Dispatch::new(builder.without_time().finish())
        };
        tracing::debug!(
            logger = logger.name(),
            %level,
            streams = ?self.streams,
            "logger configured"
        );
        Ok(ConfiguredLogger {
            name: logger.name,
            level,
            dispatch,
        })
    }

    fn clone_with(&self, overrides: FmtOverrides) -> Self {
        Self {
            level: overrides.level.unwrap_or_else(|| self.level.clone()),
            no_warn: overrides.no_warn.unwrap_or(self.no_warn),
            with_target: overrides.with_target.unwrap_or(self.with_target),
            with_thread_ids: overrides.with_thread_ids.unwrap_or(self.with_thread_ids),
            with_thread_names: overrides.with_thread_names.unwrap_or(self.with_thread_names),
            with_line_number: overrides.with_line_number.unwrap_or(self.with_line_number),
            with_ansi: overrides.with_ansi.unwrap_or(self.with_ansi),
            streams: overrides.streams.unwrap_or_else(|| self.streams.clone()),
            diff_fmt_per_level: overrides
                .diff_fmt_per_level
                .unwrap_or(self.diff_fmt_per_level),
        }
    }
}

/// Overrides accepted by [`FmtLoggerConfigurator`]'s `clone_with`.
#[derive(Debug, Clone, Default)]
pub struct FmtOverrides {
    pub level: Option<LogLevel>,
    pub no_warn: Option<bool>,
    pub with_target: Option<bool>,
    pub with_thread_ids: Option<bool>,
    pub with_thread_names: Option<bool>,
    pub with_line_number: Option<bool>,
    pub with_ansi: Option<bool>,
    pub streams: Option<Vec<LogStream>>,
    pub diff_fmt_per_level: Option<bool>,
}

impl FmtOverrides {
    pub fn level(mut self, level: impl Into<LogLevel>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn no_warn(mut self, no_warn: bool) -> Self {
        self.no_warn = Some(no_warn);
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = Some(with_target);
        self
    }

    pub fn with_thread_ids(mut self, with_thread_ids: bool) -> Self {
        self.with_thread_ids = Some(with_thread_ids);
        self
    }

    pub fn with_thread_names(mut self, with_thread_names: bool) -> Self {
        self.with_thread_names = Some(with_thread_names);
        self
    }

    pub fn with_line_number(mut self, with_line_number: bool) -> Self {
        self.with_line_number = Some(with_line_number);
        self
    }

    pub fn with_ansi(mut self, with_ansi: bool) -> Self {
        self.with_ansi = Some(with_ansi);
        self
    }

    pub fn streams(mut self, streams: impl IntoIterator<Item = LogStream>) -> Self {
        self.streams = Some(streams.into_iter().collect());
        self
    }

    pub fn diff_fmt_per_level(mut self, diff_fmt_per_level: bool) -> Self {
        self.diff_fmt_per_level = Some(diff_fmt_per_level);
        self
    }
}
