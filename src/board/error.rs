//! Errors surfaced by board operations.

use crate::task::domain::TaskDomainError;
use thiserror::Error;

/// Board-level errors.
///
/// Only input validation reaches callers; storage failures are logged and
/// absorbed by the persistence layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
