//! Main logger implementation

use super::{
    error::Result, format::format_line, metrics::LoggerMetrics, severity::Severity, sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::StdoutSink;
use parking_lot::{Mutex, RwLock};
use std::fmt;

/// Message emitted at DEBUG right after construction. Hidden unless the
/// logger starts at the DEBUG threshold.
pub const DEBUG_ANNOUNCEMENT: &str = "!!! Debug log level enabled !!!";

/// A severity-filtered writer over a single sink.
///
/// A message at level `L` is written iff `rank(threshold) >= rank(L)`.
/// Every operation takes `&self`; the threshold sits behind a read-write lock
/// and each accepted line is written whole while holding the sink lock.
pub struct LeveledLogger {
    threshold: RwLock<Severity>,
    sink: Mutex<Box<dyn Sink>>,
    timestamp_format: TimestampFormat,
    metrics: LoggerMetrics,
}

impl LeveledLogger {
    /// Logger on stdout at the INFO threshold.
    ///
    /// Emits `Logger initialized with log level INFO` followed by the DEBUG
    /// announcement, which the INFO threshold suppresses.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Same as [`LeveledLogger::new`] but writing to `sink`.
    #[must_use]
    pub fn with_sink<S: Sink + 'static>(sink: S) -> Self {
        Self::builder().sink(sink).build()
    }

    fn announce_startup(&self) {
        self.info(format_args!(
            "Logger initialized with log level {}",
            self.threshold()
        ));
        self.debug(DEBUG_ANNOUNCEMENT);
    }

    /// Returns true iff `name` is one of INFO, WARN, ERROR, DEBUG.
    pub fn validate(&self, name: &str) -> bool {
        Severity::validate(name)
    }

    #[inline]
    pub fn is_enabled(&self, level: Severity) -> bool {
        self.threshold.read().admits(level)
    }

    /// Like [`LeveledLogger::is_enabled`]; an unrecognized name is never enabled.
    pub fn is_enabled_str(&self, name: &str) -> bool {
        name.parse::<Severity>()
            .map(|level| self.is_enabled(level))
            .unwrap_or(false)
    }

    /// Write `message` at `level` if the threshold admits it.
    ///
    /// The message is only rendered after the filter passes, so passing
    /// `format_args!` keeps suppressed calls cheap.
    pub fn emit(&self, level: Severity, message: impl fmt::Display) {
        self.emit_at(self.threshold(), level, message);
    }

    /// Filter against an already-read `threshold` value.
    fn emit_at(&self, threshold: Severity, level: Severity, message: impl fmt::Display) {
        if !threshold.admits(level) {
            self.metrics.record_filtered();
            return;
        }

        let timestamp = self.timestamp_format.format_now();
        let line = format_line(level, &timestamp, message);
        self.write_line(&line);
    }

    /// Emit with a level given by name. Unrecognized names are dropped silently.
    pub fn emit_str(&self, name: &str, message: impl fmt::Display) {
        match name.parse::<Severity>() {
            Ok(level) => self.emit(level, message),
            Err(_) => {
                self.metrics.record_filtered();
            }
        }
    }

    fn write_line(&self, line: &str) {
        let mut sink = self.sink.lock();
        match sink.write_line(line) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_write_failure();
                eprintln!("[LOGGER ERROR] sink '{}' write failed: {}", sink.name(), e);
            }
        }
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Severity::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Severity::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Severity::Error, message);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Severity::Debug, message);
    }

    /// Set the threshold, then announce the change at INFO under the new
    /// threshold.
    pub fn set_threshold(&self, level: Severity) {
        *self.threshold.write() = level;
        self.info(format_args!("Log level set to {}", level));
    }

    /// Set the threshold from a name.
    ///
    /// An unrecognized name leaves the threshold untouched and reports the
    /// rejection at ERROR, which the unchanged threshold may itself suppress.
    pub fn set_threshold_str(&self, name: &str) {
        match name.parse::<Severity>() {
            Ok(level) => self.set_threshold(level),
            Err(_) => {
                self.metrics.record_rejected_threshold();
                let current = self.threshold();
                self.emit_at(
                    current,
                    Severity::Error,
                    format_args!(
                        "Invalid log level {}! Loglevel still is set to {}",
                        name, current
                    ),
                );
            }
        }
    }

    #[inline]
    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    /// Create a builder for LeveledLogger
    ///
    /// # Example
    /// ```
    /// use leveled_logger::prelude::*;
    ///
    /// let capture = MemorySink::new();
    /// let logger = LeveledLogger::builder()
    ///     .threshold(Severity::Debug)
    ///     .sink(capture.clone())
    ///     .announce(false)
    ///     .build();
    ///
    /// logger.debug("visible");
    /// assert_eq!(capture.lines().len(), 1);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for LeveledLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LeveledLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledLogger")
            .field("threshold", &self.threshold())
            .field("sink", &self.sink.lock().name())
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}

/// Builder for constructing a LeveledLogger with a fluent API
pub struct LoggerBuilder {
    threshold: Severity,
    sink: Option<Box<dyn Sink>>,
    timestamp_format: TimestampFormat,
    announce: bool,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            threshold: Severity::Info,
            sink: None,
            timestamp_format: TimestampFormat::Default,
            announce: true,
        }
    }

    /// Initial threshold (default INFO)
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: Severity) -> Self {
        self.threshold = level;
        self
    }

    /// Output sink (default stdout)
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Whether to emit the startup lines on build (default true)
    #[must_use = "builder methods return a new value"]
    pub fn announce(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }

    pub fn build(self) -> LeveledLogger {
        let sink: Box<dyn Sink> = match self.sink {
            Some(sink) => sink,
            None => Box::new(StdoutSink::new()),
        };

        let logger = LeveledLogger {
            threshold: RwLock::new(self.threshold),
            sink: Mutex::new(sink),
            timestamp_format: self.timestamp_format,
            metrics: LoggerMetrics::new(),
        };

        if self.announce {
            logger.announce_startup();
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::sinks::MemorySink;

    fn quiet(threshold: Severity) -> (LeveledLogger, MemorySink) {
        let capture = MemorySink::new();
        let logger = LeveledLogger::builder()
            .threshold(threshold)
            .sink(capture.clone())
            .announce(false)
            .build();
        (logger, capture)
    }

    struct FailingSink;

    impl Sink for FailingSink {
        fn write_line(&mut self, _line: &str) -> Result<()> {
            Err(LoggerError::IoError(std::io::Error::other("disk full")))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_startup_announcement() {
        let capture = MemorySink::new();
        let logger = LeveledLogger::with_sink(capture.clone());

        let lines = capture.lines();
        assert_eq!(lines.len(), 1, "DEBUG announcement must stay hidden: {lines:?}");
        assert!(lines[0].starts_with("[LOG-INFO]["));
        assert!(lines[0].ends_with("] Logger initialized with log level INFO"));
        assert_eq!(logger.threshold(), Severity::Info);
        assert_eq!(logger.metrics().filtered(), 1);
    }

    #[test]
    fn test_startup_announcement_at_debug() {
        let capture = MemorySink::new();
        let _logger = LeveledLogger::builder()
            .threshold(Severity::Debug)
            .sink(capture.clone())
            .build();

        let lines = capture.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Logger initialized with log level DEBUG"));
        assert!(lines[1].starts_with("[LOG-DEBUG]["));
        assert!(lines[1].ends_with(DEBUG_ANNOUNCEMENT));
    }

    #[test]
    fn test_is_enabled_matrix() {
        for threshold in Severity::ALL {
            let (logger, _) = quiet(threshold);
            for level in Severity::ALL {
                assert_eq!(
                    logger.is_enabled(level),
                    threshold.rank() >= level.rank(),
                    "threshold {threshold} level {level}"
                );
            }
        }
    }

    #[test]
    fn test_is_enabled_str_unknown_is_false() {
        let (logger, _) = quiet(Severity::Debug);
        assert!(logger.is_enabled_str("ERROR"));
        assert!(!logger.is_enabled_str("TRACE"));
        assert!(!logger.is_enabled_str("debug"));
    }

    #[test]
    fn test_debug_hidden_at_info() {
        let (logger, capture) = quiet(Severity::Info);
        logger.debug("x");
        assert!(capture.is_empty());
    }

    #[test]
    fn test_info_visible_at_debug() {
        let (logger, capture) = quiet(Severity::Debug);
        logger.info(format_args!("hello {}", "world"));

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[LOG-INFO]["));
        assert!(lines[0].ends_with("] hello world"));
        assert!(capture.contents().ends_with('\n'));
    }

    #[test]
    fn test_emit_str_unknown_level_is_silent() {
        let (logger, capture) = quiet(Severity::Debug);
        logger.emit_str("TRACE", "never");
        logger.emit_str("WARN", "shown");

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[LOG-WARN]["));
        assert_eq!(logger.metrics().filtered(), 1);
    }

    #[test]
    fn test_set_threshold_announces_under_new_threshold() {
        let (logger, capture) = quiet(Severity::Info);
        logger.set_threshold_str("ERROR");

        assert_eq!(logger.threshold(), Severity::Error);
        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("] Log level set to ERROR"));
    }

    #[test]
    fn test_invalid_threshold_suppressed_at_warn() {
        let (logger, capture) = quiet(Severity::Warn);
        logger.set_threshold_str("TRACE");

        assert_eq!(logger.threshold(), Severity::Warn);
        assert!(capture.is_empty());
        assert_eq!(logger.metrics().rejected_thresholds(), 1);
    }

    #[test]
    fn test_invalid_threshold_reported_at_error() {
        let (logger, capture) = quiet(Severity::Error);
        logger.set_threshold_str("TRACE");

        assert_eq!(logger.threshold(), Severity::Error);
        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[LOG-ERROR]["));
        assert!(lines[0].ends_with("] Invalid log level TRACE! Loglevel still is set to ERROR"));
    }

    #[test]
    fn test_sink_failure_is_counted_not_returned() {
        let logger = LeveledLogger::builder()
            .threshold(Severity::Debug)
            .sink(FailingSink)
            .announce(false)
            .build();

        logger.info("lost");
        logger.warn("lost too");

        assert_eq!(logger.metrics().write_failures(), 2);
        assert_eq!(logger.metrics().written(), 0);
        assert_eq!(logger.metrics().filtered(), 0);
    }

    #[test]
    fn test_filtered_call_never_reaches_failing_sink() {
        let logger = LeveledLogger::builder()
            .sink(FailingSink)
            .announce(false)
            .build();

        // WARN outranks the INFO threshold
        logger.warn("suppressed");

        assert_eq!(logger.metrics().filtered(), 1);
        assert_eq!(logger.metrics().write_failures(), 0);
    }

    #[test]
    fn test_custom_timestamp_format() {
        let capture = MemorySink::new();
        let logger = LeveledLogger::builder()
            .threshold(Severity::Debug)
            .sink(capture.clone())
            .timestamp_format(TimestampFormat::Custom("fixed".to_string()))
            .announce(false)
            .build();

        logger.warn("careful");
        assert_eq!(capture.contents(), "[LOG-WARN][fixed] careful\n");
    }

    #[test]
    fn test_debug_format_names_sink() {
        let (logger, _) = quiet(Severity::Warn);
        let rendered = format!("{:?}", logger);
        assert!(rendered.contains("Warn"));
        assert!(rendered.contains("memory"));
    }
}
