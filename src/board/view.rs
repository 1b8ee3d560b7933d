//! Read-only projections for rendering the board and the activity panel.

use chrono::{DateTime, Utc};

use crate::task::domain::{Lane, Task};

/// One lane with the tasks to render in it, in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    lane: Lane,
    tasks: Vec<&'a Task>,
}

impl<'a> Column<'a> {
    /// Returns the lane.
    #[must_use]
    pub const fn lane(&self) -> Lane {
        self.lane
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.lane.title()
    }

    /// Returns the tasks in the column.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Returns the number of tasks, shown as the column badge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Groups `tasks` into one column per lane, in lane display order.
///
/// Every lane gets a column, empty or not.
#[must_use]
pub fn group_by_lane<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<Column<'a>> {
    let mut columns: Vec<Column<'a>> = Lane::ALL
        .into_iter()
        .map(|lane| Column {
            lane,
            tasks: Vec::new(),
        })
        .collect();
    for task in tasks {
        if let Some(column) = columns.iter_mut().find(|column| column.lane == task.status()) {
            column.tasks.push(task);
        }
    }
    columns
}

/// Describes how long ago `timestamp` was, relative to `now`.
///
/// Produces `just now` under a minute, then whole minutes, hours, and days.
/// Timestamps in the future count as `just now`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use taskboard::board::relative_time;
///
/// let now = Utc::now();
/// assert_eq!(relative_time(now - Duration::minutes(5), now), "5m ago");
/// ```
#[must_use]
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_owned();
    }
    let hours = elapsed.num_hours();
    if hours < 1 {
        return format!("{minutes}m ago");
    }
    let days = elapsed.num_days();
    if days < 1 {
        return format!("{hours}h ago");
    }
    format!("{days}d ago")
}
