//! Error types for the formatting library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all formatting operations.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Input could not be read as a point in time
    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },
    /// The requested calendar cannot represent the given date
    #[error("Calendar '{calendar}' unsupported: {reason}")]
    CalendarUnsupported {
        calendar: &'static str,
        reason: String,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating invalid timestamp errors.
pub struct InvalidTimestampBuilder {
    input: String,
}

impl InvalidTimestampBuilder {
    /// Create a new builder for the offending input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl ToString) -> FormatError {
        FormatError::InvalidTimestamp {
            input: self.input,
            reason: reason.to_string(),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> FormatError {
        FormatError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl FormatError {
    /// Creates a builder for timestamp parsing errors.
    pub fn invalid_timestamp(input: impl Into<String>) -> InvalidTimestampBuilder {
        InvalidTimestampBuilder::new(input)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true when this error means the input was not a valid instant.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, FormatError::InvalidTimestamp { .. })
    }
}

/// Result type alias for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_timestamp_message() {
        let err = FormatError::invalid_timestamp("yesterday-ish").with_reason("unrecognized");
        assert!(err.is_invalid_timestamp());
        assert_eq!(
            err.to_string(),
            "Invalid timestamp 'yesterday-ish': unrecognized"
        );
    }

    #[test]
    fn test_invalid_input_message() {
        let err = FormatError::invalid_input("language").with_reason("expected en or ar");
        assert!(!err.is_invalid_timestamp());
        assert!(err.to_string().contains("'language'"));
    }
}
