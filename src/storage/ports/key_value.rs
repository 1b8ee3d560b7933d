//! Key-value port for the board's persistence medium.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueResult<T> = Result<T, KeyValueError>;

/// Synchronous string key-value store contract.
///
/// Implementations take `&self` so a single handle can be shared between the
/// task store and the history log.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backing medium cannot be read.
    fn get(&self, key: &str) -> KeyValueResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backing medium rejects the write.
    fn set(&self, key: &str, value: &str) -> KeyValueResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueError {
    /// The key cannot be represented by the backing medium.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Backend-specific failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl KeyValueError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
