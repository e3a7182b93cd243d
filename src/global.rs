//! Process-wide default logger
//!
//! Created on first use rather than before `main`, so nothing is written
//! until a caller actually asks for it.

use crate::core::LeveledLogger;
use std::sync::OnceLock;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static DEFAULT_LOGGER: OnceLock<LeveledLogger> = OnceLock::new();

/// The shared stdout logger, starting at the INFO threshold.
///
/// # Example
///
/// ```
/// use leveled_logger::{default_logger, Severity};
///
/// default_logger().warn("cache miss");
/// assert!(default_logger().is_enabled(Severity::Info));
/// ```
pub fn default_logger() -> &'static LeveledLogger {
    DEFAULT_LOGGER.get_or_init(LeveledLogger::new)
}
