//! Timestamp formatting for log lines
//!
//! Lines are stamped with the local wall-clock time. The default layout is
//! `YYYY/MM/DD-HH:MM:SS`, zero-padded and 24-hour.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// strftime layout of the default timestamp: `2025/01/08-10:30:45`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d-%H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use leveled_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Default.format(&at), "2025/01/08-10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `YYYY/MM/DD-HH:MM:SS`
    #[default]
    Default,

    /// Custom strftime format
    ///
    /// ```
    /// use leveled_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// The strftime pattern this format renders with
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            TimestampFormat::Default => DEFAULT_TIMESTAMP_FORMAT,
            TimestampFormat::Custom(format_str) => format_str,
        }
    }

    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        datetime.format(self.pattern()).to_string()
    }

    /// Format the current local time
    #[must_use]
    pub fn format_now(&self) -> String {
        self.format(&Local::now())
    }
}

/// Current local time in the default layout.
#[must_use]
pub fn now() -> String {
    TimestampFormat::Default.format_now()
}
