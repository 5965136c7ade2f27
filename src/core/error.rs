//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File appender error with path
    #[error("File appender error for '{path}': {message}")]
    FileAppender { path: String, message: String },

    /// A message template referenced a field the mapping does not contain
    #[error("Template '{template}' is missing required field '{field}'")]
    MissingField { template: String, field: String },

    /// An extractor was pointed at the wrong kind of target
    #[error("Expected a {expected} target, got a {found} target")]
    TargetMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Text alignment/wrapping error
    #[error(transparent)]
    Text(#[from] crate::text::TextError),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    Writer(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppender {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a missing-field error for a message template
    pub fn missing_field(template: impl Into<String>, field: impl Into<String>) -> Self {
        LoggerError::MissingField {
            template: template.into(),
            field: field.into(),
        }
    }

    /// Create a target-mismatch error
    pub fn target_mismatch(expected: &'static str, found: &'static str) -> Self {
        LoggerError::TargetMismatch { expected, found }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::Writer(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
