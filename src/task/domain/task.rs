//! Task aggregate root and the partial update applied to it.

use super::{Lane, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Serialized in the board's storage format: camelCase keys, the lane under
/// `status`, and RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: Lane,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the given lane.
    ///
    /// Both timestamps are taken from a single clock reading so that a fresh
    /// task always has `created_at == updated_at`.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: Option<String>,
        status: Lane,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            description: normalize_description(description),
            status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the lane the task currently sits in.
    #[must_use]
    pub const fn status(&self) -> Lane {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges the fields present in `patch` and refreshes `updated_at`.
    pub fn apply(&mut self, patch: TaskPatch, clock: &impl Clock) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.touch(clock);
    }

    /// Moves the task to `lane`.
    ///
    /// Returns `false` without touching the timestamp when the task is
    /// already in that lane.
    pub fn move_to(&mut self, lane: Lane, clock: &impl Clock) -> bool {
        if self.status == lane {
            return false;
        }
        self.status = lane;
        self.touch(clock);
        true
    }

    /// Puts the task back in `lane` with `updated_at` as its last
    /// modification, undoing transient moves.
    ///
    /// Returns `false` when the task already has both values.
    pub fn restore(&mut self, lane: Lane, updated_at: DateTime<Utc>) -> bool {
        if self.status == lane && self.updated_at == updated_at {
            return false;
        }
        self.status = lane;
        self.updated_at = updated_at;
        true
    }

    /// Returns whether `keyword` (already lowercased) occurs in the title or
    /// description, ignoring case.
    #[must_use]
    pub fn mentions(&self, keyword: &str) -> bool {
        self.title.as_str().to_lowercase().contains(keyword)
            || self
                .description
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(keyword))
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Partial update for a task; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    description: Option<Option<String>>,
    status: Option<Lane>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets a new description. Blank text clears the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(normalize_description(Some(description.into())));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets a new lane.
    #[must_use]
    pub const fn with_status(mut self, status: Lane) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the title carried by the patch, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns `true` when the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

/// Trims a description and drops it when nothing is left.
fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
