//! Bounded activity log with write-through persistence.

use crate::history::domain::{HISTORY_CAPACITY, HistoryAction, HistoryEntry, latest};
use crate::storage::{ports::KeyValueStore, services::BoardStorage};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Oldest-first log of the most recent board activity.
///
/// The log never holds more than [`HISTORY_CAPACITY`] entries; appending to
/// a full log evicts the oldest entry.
#[derive(Debug)]
pub struct HistoryLog<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    entries: Vec<HistoryEntry>,
    storage: Arc<BoardStorage<S>>,
    clock: Arc<C>,
}

impl<S, C> HistoryLog<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Creates an empty log.
    #[must_use]
    pub const fn new(storage: Arc<BoardStorage<S>>, clock: Arc<C>) -> Self {
        Self {
            entries: Vec::new(),
            storage,
            clock,
        }
    }

    /// Records a new entry, evicting the oldest ones beyond capacity, and
    /// persists the log.
    pub fn append(
        &mut self,
        action: HistoryAction,
        task_title: impl Into<String>,
        details: Option<String>,
    ) -> HistoryEntry {
        let entry = HistoryEntry::new(action, task_title, details, &*self.clock);
        self.entries.push(entry.clone());
        let excess = self.entries.len().saturating_sub(HISTORY_CAPACITY);
        self.entries.drain(..excess);
        debug!(action = %action, evicted = excess, "history entry recorded");
        self.storage.save_history(&self.entries);
        entry
    }

    /// Removes every entry and persists the empty log.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.storage.save_history(&self.entries);
    }

    /// Replaces the log with entries loaded from storage, keeping only the
    /// newest ones that fit. Does not write back.
    pub fn load_all(&mut self, entries: Vec<HistoryEntry>) {
        self.entries = latest(&entries).to_vec();
    }

    /// Returns the entries, oldest first.
    #[must_use]
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Iterates the entries newest first, as the activity panel shows them.
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the log holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of retained entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }
}
