//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every directory error is a recoverable outcome handed back to the caller.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by [`Directory`](crate::Directory) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// First or last name missing
    #[error("Invalid contact: {0}")]
    Validation(#[from] ValidationError),

    /// No free slot left
    #[error("Directory is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A contact with the same name already exists
    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    /// No contact with the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Capacity must be positive
    #[error("Invalid capacity: {0} (must be positive)")]
    InvalidCapacity(usize),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DirectoryError::NotFound("Amy Lee".to_string());
        assert_eq!(err.to_string(), "Contact not found: Amy Lee");

        let err = DirectoryError::CapacityExceeded { capacity: 3 };
        assert_eq!(err.to_string(), "Directory is full (capacity 3)");

        let err = DirectoryError::from(ValidationError::EmptyLastName);
        assert_eq!(err.to_string(), "Invalid contact: last name cannot be empty");

        let err = ConfigError::InvalidValue {
            var: "DIRECTORY_CAPACITY".to_string(),
            reason: "Must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for DIRECTORY_CAPACITY: Must be positive"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: DirectoryError = ValidationError::EmptyFirstName.into();
        assert_eq!(
            err,
            DirectoryError::Validation(ValidationError::EmptyFirstName)
        );
    }
}
