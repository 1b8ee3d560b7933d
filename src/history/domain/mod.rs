//! Domain model for the bounded activity log.

mod entry;

pub use entry::{HISTORY_CAPACITY, HistoryAction, HistoryEntry, HistoryEntryId, latest};
