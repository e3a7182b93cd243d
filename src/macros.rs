//! Logging macros with positional template substitution.
//!
//! Arguments are substituted with `format_args!`, so nothing is rendered for
//! calls the threshold suppresses.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::info;
//!
//! let logger = LeveledLogger::builder().sink(MemorySink::new()).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = LeveledLogger::builder().sink(MemorySink::new()).build();
/// use leveled_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.emit($level, format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = LeveledLogger::builder().sink(MemorySink::new()).build();
/// use leveled_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a debug-level message. Only written at the DEBUG threshold.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = LeveledLogger::builder().sink(MemorySink::new()).build();
/// # logger.set_threshold(Severity::Debug);
/// use leveled_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}
