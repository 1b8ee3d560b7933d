//! Persistence services shared by the task store and the activity log.

mod config;
mod persistence;

pub use config::{DEFAULT_HISTORY_KEY, DEFAULT_TASKS_KEY, StorageConfig};
pub use persistence::{BoardStorage, StorageError, StorageResult};
