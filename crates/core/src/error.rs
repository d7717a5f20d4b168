//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure in this system is a deterministic, caller-correctable input
/// error: validation happens before any state change, so a failed call leaves
/// the warehouse untouched and the caller retries with corrected input. There
/// is no IO, so no transient-failure class exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A caller-supplied argument was rejected (blank name, duplicate id,
    /// unknown id, negative price).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
