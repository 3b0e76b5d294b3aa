//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The operation would violate a uniqueness rule.
    #[error("{0}")]
    Conflict(String),

    /// Caller input failed validation.
    #[error("{0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// The event referenced by a request does not exist.
    #[must_use]
    pub fn event_not_found() -> Self {
        Self::NotFound("Event not found".to_owned())
    }
}
