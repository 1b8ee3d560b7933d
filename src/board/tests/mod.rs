//! Unit tests for the board module.


use std::sync::Arc;

use crate::board::Board;
use crate::history::domain::{HistoryAction, HistoryEntry};
use crate::storage::adapters::InMemoryKeyValueStore;
use crate::task::domain::{Lane, TaskId};
use crate::test_support::{SteppingClock, memory_storage};

type TestBoard = Board<InMemoryKeyValueStore, SteppingClock>;

fn fresh_board() -> (InMemoryKeyValueStore, TestBoard) {
    let (store, storage) = memory_storage();
    (store, Board::new(storage, Arc::new(SteppingClock::new())))
}

fn add(board: &mut TestBoard, title: &str, lane: Lane) -> TaskId {
    board.add_task(title, None, lane).expect("valid task").id()
}

fn titles_in(board: &TestBoard, lane: Lane) -> Vec<String> {
    board
        .task_store()
        .tasks_in(lane)
        .map(|task| task.title().as_str().to_owned())
        .collect()
}

fn actions(board: &TestBoard) -> Vec<HistoryAction> {
    board
        .history()
        .list()
        .iter()
        .map(HistoryEntry::action)
        .collect()
}
