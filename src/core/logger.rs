//! Main logger implementation

use super::{
    appender::Appender,
    error::Result,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    prefix::PrefixTable,
    timestamp::TimeFormat,
};
use crate::appenders::ConsoleAppender;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;

/// Threshold of a freshly built logger
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// Leveled logger writing `prefix time message` lines to a single output.
///
/// The prefix table is built once by the host (see [`PrefixTable::init`])
/// and shared; threshold, time format and output can be changed at runtime.
///
/// # Example
///
/// ```
/// use rust_console_logger::{LogLevel, Logger, PrefixStyle, PrefixTable};
/// use std::sync::Arc;
///
/// let prefixes = Arc::new(PrefixTable::new(PrefixStyle::Long));
/// let logger = Logger::new(prefixes);
/// logger.set_level(LogLevel::Debug);
/// assert!(logger.enabled(LogLevel::Debug));
/// ```
pub struct Logger {
    level: RwLock<LogLevel>,
    time_format: RwLock<TimeFormat>,
    prefixes: Arc<PrefixTable>,
    output: Mutex<Box<dyn Appender>>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Logger at [`DEFAULT_LEVEL`] writing to stderr with the default time format
    #[must_use]
    pub fn new(prefixes: Arc<PrefixTable>) -> Self {
        Self::builder(prefixes).build()
    }

    pub fn builder(prefixes: Arc<PrefixTable>) -> LoggerBuilder {
        LoggerBuilder::new(prefixes)
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Set the threshold from a configuration token.
    ///
    /// Unknown names disable the logger; the resolved level is returned so
    /// callers can detect that.
    pub fn set_level_name(&self, name: &str) -> LogLevel {
        let level = LogLevel::from_name(name);
        self.set_level(level);
        level
    }

    pub fn time_format(&self) -> TimeFormat {
        self.time_format.read().clone()
    }

    pub fn set_time_format(&self, format: impl Into<TimeFormat>) {
        *self.time_format.write() = format.into();
    }

    /// Replace the output, returning the previous one unflushed.
    pub fn set_output(&self, appender: Box<dyn Appender>) -> Box<dyn Appender> {
        std::mem::replace(&mut *self.output.lock(), appender)
    }

    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level().permits(level)
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if self.admit(level) {
            self.emit(level, message.as_ref());
        }
    }

    /// Like [`Logger::log`], formatting `args` only when `level` passes.
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.admit(level) {
            match args.as_str() {
                Some(message) => self.emit(level, message),
                None => self.emit(level, &args.to_string()),
            }
        }
    }

    /// Write a raw line: no level prefix, no color.
    ///
    /// Raw lines ignore the threshold unless the logger is disabled.
    pub fn println(&self, message: impl AsRef<str>) {
        if self.level() == LogLevel::Disable {
            self.metrics.record_suppressed();
            return;
        }

        let line = self.format_line("", message.as_ref());
        let mut output = self.output.lock();
        self.write(&mut **output, &line);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn flush(&self) -> Result<()> {
        self.output.lock().flush()
    }

    /// # Example
    ///
    /// ```
    /// use rust_console_logger::{Logger, PrefixTable};
    /// use std::sync::Arc;
    ///
    /// let logger = Logger::new(Arc::new(PrefixTable::default()));
    /// logger.debug("filtered out at the default level");
    /// assert_eq!(logger.metrics().suppressed_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    fn admit(&self, level: LogLevel) -> bool {
        let admitted = self.enabled(level);
        if !admitted {
            self.metrics.record_suppressed();
        }
        admitted
    }

    fn emit(&self, level: LogLevel, message: &str) {
        let mut output = self.output.lock();
        let prefix = self.prefixes.render(level, output.supports_color());
        let line = self.format_line(prefix, message);
        self.write(&mut **output, &line);
    }

    /// `prefix time message`, skipping empty parts, newline-terminated.
    fn format_line(&self, prefix: &str, message: &str) -> String {
        let time = self.time_format.read().now();

        let mut line = String::with_capacity(prefix.len() + message.len() + 24);
        for part in [prefix, time.as_deref().unwrap_or(""), message] {
            if part.is_empty() {
                continue;
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(part);
        }
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn write(&self, output: &mut dyn Appender, line: &str) {
        match output.write_line(line) {
            Ok(()) => self.metrics.record_written(),
            Err(e) => {
                let previous = self.metrics.record_write_failure();
                // Alert on first failure and periodically thereafter
                if previous == 0 || (previous + 1).is_multiple_of(1000) {
                    eprintln!(
                        "[LOGGER ERROR] Appender '{}' failed ({} lines lost): {}",
                        output.name(),
                        previous + 1,
                        e
                    );
                }
            }
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.output.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Flush on drop failed: {}", e);
        }
    }
}

/// Builder for configuring a [`Logger`]
///
/// # Example
///
/// ```
/// use rust_console_logger::{LogLevel, Logger, PrefixTable, TimeFormat, WriterAppender};
/// use std::sync::Arc;
///
/// let logger = Logger::builder(Arc::new(PrefixTable::default()))
///     .level(LogLevel::Warn)
///     .time_format(TimeFormat::disabled())
///     .output(WriterAppender::new(std::io::sink()))
///     .build();
///
/// assert_eq!(logger.level(), LogLevel::Warn);
/// ```
pub struct LoggerBuilder {
    prefixes: Arc<PrefixTable>,
    level: LogLevel,
    time_format: TimeFormat,
    output: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new(prefixes: Arc<PrefixTable>) -> Self {
        Self {
            prefixes,
            level: DEFAULT_LEVEL,
            time_format: TimeFormat::default(),
            output: None,
        }
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Threshold from a configuration token; unknown names disable logging.
    #[must_use]
    pub fn level_name(self, name: &str) -> Self {
        self.level(LogLevel::from_name(name))
    }

    #[must_use]
    pub fn time_format(mut self, format: impl Into<TimeFormat>) -> Self {
        self.time_format = format.into();
        self
    }

    /// Defaults to [`ConsoleAppender::stderr`] when not set.
    #[must_use]
    pub fn output<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.output = Some(Box::new(appender));
        self
    }

    pub fn build(self) -> Logger {
        let output = self
            .output
            .unwrap_or_else(|| Box::new(ConsoleAppender::stderr()));

        Logger {
            level: RwLock::new(self.level),
            time_format: RwLock::new(self.time_format),
            prefixes: self.prefixes,
            output: Mutex::new(output),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}
