//! Domain validation errors.

use std::fmt;

/// Errors that can occur when validating a contact before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The first name is empty or only whitespace.
    EmptyFirstName,

    /// The last name is empty or only whitespace.
    EmptyLastName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "first name cannot be empty"),
            Self::EmptyLastName => write!(f, "last name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
