//! Storage key configuration.

/// Key under which the task collection is stored by default.
pub const DEFAULT_TASKS_KEY: &str = "kanbanTasks";

/// Key under which the activity log is stored by default.
pub const DEFAULT_HISTORY_KEY: &str = "kanbanHistory";

/// Configuration for where board collections live in the key-value store.
///
/// # Examples
///
/// ```
/// use taskboard::storage::services::StorageConfig;
///
/// let config = StorageConfig::default();
/// assert_eq!(config.tasks_key, "kanbanTasks");
///
/// let work = StorageConfig::namespaced("work");
/// assert_eq!(work.history_key, "work.kanbanHistory");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Key for the serialized task collection.
    pub tasks_key: String,
    /// Key for the serialized activity log.
    pub history_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_owned(),
            history_key: DEFAULT_HISTORY_KEY.to_owned(),
        }
    }
}

impl StorageConfig {
    /// Creates a configuration whose keys are prefixed with `namespace`.
    ///
    /// Useful for keeping several boards in one store.
    #[must_use]
    pub fn namespaced(namespace: &str) -> Self {
        Self {
            tasks_key: format!("{namespace}.{DEFAULT_TASKS_KEY}"),
            history_key: format!("{namespace}.{DEFAULT_HISTORY_KEY}"),
        }
    }
}
