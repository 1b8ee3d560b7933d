//! JSON persistence for the task collection and the activity log.
//!
//! Every failure is logged and swallowed here: callers always receive a
//! collection (possibly empty) on load, and a failed save never disturbs the
//! in-memory state that requested it.

use crate::history::domain::{HistoryEntry, latest};
use crate::storage::ports::{KeyValueError, KeyValueStore};
use crate::task::domain::Task;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use super::StorageConfig;

/// Errors raised while moving board collections in and out of storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key-value store failed.
    #[error("storage failure for '{key}': {source}")]
    Backend {
        /// Key being read or written.
        key: String,
        /// Underlying store error.
        source: KeyValueError,
    },

    /// The collection could not be encoded.
    #[error("failed to encode '{key}': {source}")]
    Encode {
        /// Key being written.
        key: String,
        /// Underlying serializer error.
        source: serde_json::Error,
    },

    /// The stored value is not a valid collection.
    #[error("malformed data under '{key}': {source}")]
    Decode {
        /// Key being read.
        key: String,
        /// Underlying parser error.
        source: serde_json::Error,
    },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Best-effort persistence for board collections.
#[derive(Debug)]
pub struct BoardStorage<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    config: StorageConfig,
}

impl<S> BoardStorage<S>
where
    S: KeyValueStore,
{
    /// Creates storage using the default keys.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, StorageConfig::default())
    }

    /// Creates storage using the given keys.
    #[must_use]
    pub const fn with_config(store: Arc<S>, config: StorageConfig) -> Self {
        Self { store, config }
    }

    /// Returns the active key configuration.
    #[must_use]
    pub const fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Loads the task collection, or an empty one when nothing usable is
    /// stored.
    #[must_use]
    pub fn load_tasks(&self) -> Vec<Task> {
        self.load_or_empty(&self.config.tasks_key)
    }

    /// Writes the full task collection.
    pub fn save_tasks(&self, tasks: &[Task]) {
        self.save_or_log(&self.config.tasks_key, tasks);
    }

    /// Loads the activity log, keeping at most the newest entries that fit
    /// the log capacity.
    #[must_use]
    pub fn load_history(&self) -> Vec<HistoryEntry> {
        let entries: Vec<HistoryEntry> = self.load_or_empty(&self.config.history_key);
        latest(&entries).to_vec()
    }

    /// Writes the activity log, trimmed to the log capacity.
    pub fn save_history(&self, entries: &[HistoryEntry]) {
        self.save_or_log(&self.config.history_key, latest(entries));
    }

    fn load_or_empty<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_load(key) {
            Ok(items) => items,
            Err(err) => {
                warn!(key, error = %err, "failed to load board data, starting empty");
                Vec::new()
            }
        }
    }

    fn save_or_log<T: Serialize>(&self, key: &str, items: &[T]) {
        if let Err(err) = self.try_save(key, items) {
            warn!(key, error = %err, "failed to save board data, change kept in memory only");
        }
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Vec<T>> {
        let stored = self.store.get(key).map_err(|source| StorageError::Backend {
            key: key.to_owned(),
            source,
        })?;
        let Some(raw) = stored.filter(|raw| !raw.trim().is_empty()) else {
            return Ok(Vec::new());
        };
        let items: Vec<T> = serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
            key: key.to_owned(),
            source,
        })?;
        debug!(key, count = items.len(), "loaded board data");
        Ok(items)
    }

    fn try_save<T: Serialize>(&self, key: &str, items: &[T]) -> StorageResult<()> {
        let encoded = serde_json::to_string(items).map_err(|source| StorageError::Encode {
            key: key.to_owned(),
            source,
        })?;
        self.store
            .set(key, &encoded)
            .map_err(|source| StorageError::Backend {
                key: key.to_owned(),
                source,
            })
    }
}
