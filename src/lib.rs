//! # Leveled Logger
//!
//! A small leveled logger: a severity threshold in front of a single
//! line-oriented sink. Accepted messages are written as
//! `[LOG-<LEVEL>][YYYY/MM/DD-HH:MM:SS] <message>`.
//!
//! Severities rank INFO=0, WARN=1, ERROR=2, DEBUG=3, and a message is written
//! when the threshold's rank is at least the message's rank.

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LeveledLogger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Severity, Sink,
        TimestampFormat,
    };
    pub use crate::global::default_logger;
    pub use crate::sinks::{MemorySink, StdoutSink, WriterSink};
}

pub use crate::core::timestamp;
pub use crate::core::{
    format_line, LeveledLogger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Severity,
    Sink, TimestampFormat, DEBUG_ANNOUNCEMENT, DEFAULT_TIMESTAMP_FORMAT,
};
pub use global::{default_logger, VERSION};
pub use sinks::{MemorySink, StdoutSink, WriterSink};
