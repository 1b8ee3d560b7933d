//! Activity log entries and their identifiers.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum number of entries the activity log retains.
pub const HISTORY_CAPACITY: usize = 5;

/// Unique identifier for a history entry.
///
/// Kept as an opaque string: entries written by other board clients may use
/// identifiers that are not UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntryId(String);

impl HistoryEntryId {
    /// Creates a new random entry identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HistoryEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HistoryEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of change an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    /// A task was added.
    Created,
    /// A task's fields were edited.
    Updated,
    /// A task changed lanes.
    Moved,
    /// A task changed position within its lane.
    Reordered,
    /// A task was removed.
    Deleted,
}

impl HistoryAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Moved => "moved",
            Self::Reordered => "reordered",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of one user-visible change.
///
/// The task is referenced by a title snapshot rather than by id, so entries
/// stay readable after the task is deleted or renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    id: HistoryEntryId,
    action: HistoryAction,
    task_title: String,
    timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current clock time.
    #[must_use]
    pub fn new(
        action: HistoryAction,
        task_title: impl Into<String>,
        details: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: HistoryEntryId::new(),
            action,
            task_title: task_title.into(),
            timestamp: clock.utc(),
            details,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> &HistoryEntryId {
        &self.id
    }

    /// Returns the recorded action.
    #[must_use]
    pub const fn action(&self) -> HistoryAction {
        self.action
    }

    /// Returns the task title as it was when the action happened.
    #[must_use]
    pub fn task_title(&self) -> &str {
        &self.task_title
    }

    /// Returns when the entry was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the free-text details, if any.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Renders the sentence shown in the activity panel.
    #[must_use]
    pub fn summary(&self) -> String {
        let title = &self.task_title;
        match (self.action, self.details()) {
            (HistoryAction::Created, _) => format!("Created task \"{title}\""),
            (HistoryAction::Updated, Some(previous)) => {
                format!("Updated task \"{previous}\" to \"{title}\"")
            }
            (HistoryAction::Updated, None) => format!("Updated task \"{title}\""),
            (HistoryAction::Moved, Some(lane)) => format!("Moved task \"{title}\" to {lane}"),
            (HistoryAction::Moved, None) => format!("Moved task \"{title}\""),
            (HistoryAction::Reordered, Some(place)) => {
                format!("Reordered task \"{title}\" {place}")
            }
            (HistoryAction::Reordered, None) => format!("Reordered task \"{title}\""),
            (HistoryAction::Deleted, _) => format!("Deleted task \"{title}\""),
        }
    }
}

/// Returns the newest `HISTORY_CAPACITY` entries of `entries`.
#[must_use]
pub fn latest(entries: &[HistoryEntry]) -> &[HistoryEntry] {
    let start = entries.len().saturating_sub(HISTORY_CAPACITY);
    entries.get(start..).unwrap_or(entries)
}
