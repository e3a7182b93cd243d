//! Line layout

use super::severity::Severity;
use std::fmt::{self, Write};

/// Render one log line: `[LOG-<LEVEL>][<timestamp>] <message>\n`.
///
/// The message is written verbatim, embedded newlines included.
pub fn format_line(level: Severity, timestamp: &str, message: impl fmt::Display) -> String {
    let mut line = String::with_capacity(32 + timestamp.len());
    // Writing into a String cannot fail
    let _ = writeln!(line, "[LOG-{}][{}] {}", level, timestamp, message);
    line
}
