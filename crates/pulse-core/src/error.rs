//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
///
/// Everything except `Storage` is detected before any mutation is applied,
/// so a domain error never leaves partial state behind.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unauthorized access")]
    Unauthorized,

    /// The backing store failed mid-operation. Retryable, and the caller
    /// cannot assume the mutation applied.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store operation failed: {0}")]
    Query(String),
}
