//! Domain-level errors.
//!
//! Raised when caller input cannot be turned into a domain value.

use thiserror::Error;

/// Domain-specific errors for rejected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input does not name a valid domain value
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}
