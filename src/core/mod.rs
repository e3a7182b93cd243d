//! Core logger types and traits

pub mod error;
pub mod format;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use format::format_line;
pub use logger::{LeveledLogger, LoggerBuilder, DEBUG_ANNOUNCEMENT};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use sink::Sink;
pub use timestamp::{TimestampFormat, DEFAULT_TIMESTAMP_FORMAT};
