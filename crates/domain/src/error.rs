//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A photo record is missing a required field.
    #[error("invalid photo: {0}")]
    InvalidPhoto(String),

    /// A page index below 1 was requested.
    #[error("invalid page index: {0}")]
    InvalidPageIndex(u32),

    /// A requested page size of zero was rejected.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
