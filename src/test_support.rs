//! Helpers shared by unit tests across modules.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::storage::{adapters::InMemoryKeyValueStore, services::BoardStorage};

/// Clock that advances one second on every reading, so successive mutations
/// always observe strictly increasing timestamps.
#[derive(Debug)]
pub struct SteppingClock {
    next: AtomicI64,
}

impl SteppingClock {
    pub const fn new() -> Self {
        Self {
            next: AtomicI64::new(1_700_000_000),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let seconds = self.next.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(seconds, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

pub fn memory_storage() -> (InMemoryKeyValueStore, Arc<BoardStorage<InMemoryKeyValueStore>>) {
    let store = InMemoryKeyValueStore::new();
    let storage = Arc::new(BoardStorage::new(Arc::new(store.clone())));
    (store, storage)
}
