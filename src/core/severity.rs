//! Severity definitions
//!
//! The rank table is not monotonic with conventional severity: DEBUG has the
//! highest rank, so it is only shown once the threshold is raised to DEBUG.
//! Ordering goes through [`Severity::rank`], never through declaration order.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Info,
    Warn,
    Error,
    Debug,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Debug,
    ];

    /// Fixed rank used for threshold comparison
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Warn => 1,
            Severity::Error => 2,
            Severity::Debug => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Debug => "DEBUG",
        }
    }

    /// Returns true iff `name` is one of the four recognized tags.
    pub fn validate(name: &str) -> bool {
        name.parse::<Severity>().is_ok()
    }

    /// Whether a message at `level` passes a threshold of `self`.
    #[inline]
    pub const fn admits(self, level: Severity) -> bool {
        self.rank() >= level.rank()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Severity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    /// Exact, case-sensitive match against the tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Severity::Info),
            "WARN" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(LoggerError::invalid_severity(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_table() {
        assert_eq!(Severity::Info.rank(), 0);
        assert_eq!(Severity::Warn.rank(), 1);
        assert_eq!(Severity::Error.rank(), 2);
        assert_eq!(Severity::Debug.rank(), 3);
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warn);
        assert!("warn".parse::<Severity>().is_err());
        assert!("WARNING".parse::<Severity>().is_err());
        assert!("TRACE".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn test_validate() {
        for level in Severity::ALL {
            assert!(Severity::validate(level.as_str()));
        }
        assert!(!Severity::validate("FATAL"));
        assert!(!Severity::validate(" INFO"));
    }

    #[test]
    fn test_admits_uses_rank_not_convention() {
        assert!(!Severity::Info.admits(Severity::Debug));
        assert!(Severity::Debug.admits(Severity::Error));
        assert!(!Severity::Warn.admits(Severity::Error));
        assert!(Severity::Error.admits(Severity::Info));
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Severity::Debug).unwrap();
        assert_eq!(json, "\"DEBUG\"");
        let parsed: Severity = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(parsed, Severity::Error);
    }
}
