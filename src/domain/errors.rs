//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Input rejected before any processing happens. Never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Text input cannot be empty")]
    Empty,

    #[error("Text input too long (max {max} characters)")]
    TooLong { max: usize },
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("AI generation failed: {0}")]
    Ai(String),

    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    /// True when the caller sent bad input (client error) rather than the service failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}
