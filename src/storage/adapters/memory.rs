//! In-memory key-value store for tests and embedding.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::storage::ports::{KeyValueError, KeyValueResult, KeyValueStore};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what the board wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            state: Arc::new(RwLock::new(entries)),
        }
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| KeyValueError::backend(std::io::Error::other(err.to_string())))?;
        Ok(state.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| KeyValueError::backend(std::io::Error::other(err.to_string())))?;
        state.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
