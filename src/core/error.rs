//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A severity name outside of INFO, WARN, ERROR, DEBUG
    #[error("Invalid log level '{0}'")]
    InvalidSeverity(String),

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid severity error
    pub fn invalid_severity(name: impl Into<String>) -> Self {
        LoggerError::InvalidSeverity(name.into())
    }

    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }
}
