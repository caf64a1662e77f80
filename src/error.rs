//! Custom error types for agenda-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for agenda-cli operations
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage layer errors (record file access, lock acquisition)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A single record could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl AgendaError {
    /// Create a "not found" error for events
    pub fn event_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Event",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AgendaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AgendaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for agenda-cli operations
pub type AgendaResult<T> = Result<T, AgendaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AgendaError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = AgendaError::event_not_found("42");
        assert_eq!(err.to_string(), "Event not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_error() {
        let err = AgendaError::Validation("end before start".into());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: end before start");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let agenda_err: AgendaError = io_err.into();
        assert!(matches!(agenda_err, AgendaError::Io(_)));
    }
}
