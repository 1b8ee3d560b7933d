//! Shared world state for board BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{Board, BoardError, GestureController};
use taskboard::history::domain::HistoryEntry;
use taskboard::storage::{adapters::InMemoryKeyValueStore, services::BoardStorage};
use taskboard::task::domain::{Lane, TaskId};
use mockable::DefaultClock;

/// Board type used by the BDD world.
pub type TestBoard = Board<InMemoryKeyValueStore, DefaultClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub store: InMemoryKeyValueStore,
    pub board: TestBoard,
    pub controller: GestureController,
    pub dragging: Option<TaskId>,
    pub last_error: Option<BoardError>,
}

impl BoardWorld {
    /// Creates a world around an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryKeyValueStore::new();
        let board = open_board(&store);
        Self {
            store,
            board,
            controller: GestureController::new(),
            dragging: None,
            last_error: None,
        }
    }

    /// Rebuilds the board from whatever the store currently holds.
    pub fn reopen(&mut self) {
        self.board = open_board(&self.store);
        self.controller = GestureController::new();
        self.dragging = None;
    }

    /// Finds a task by its title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.board
            .tasks()
            .iter()
            .find(|task| task.title().as_str() == title)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }

    /// Returns the task currently being dragged.
    pub fn dragged(&self) -> Result<TaskId, eyre::Report> {
        self.dragging
            .ok_or_else(|| eyre::eyre!("no task was picked up in this scenario"))
    }

    /// Returns the newest activity entry.
    pub fn latest_entry(&self) -> Result<&HistoryEntry, eyre::Report> {
        self.board
            .history()
            .list()
            .last()
            .ok_or_else(|| eyre::eyre!("activity log is empty"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a lane identifier written in a feature file.
pub fn parse_lane(raw: &str) -> Result<Lane, eyre::Report> {
    Lane::try_from(raw).map_err(|err| eyre::eyre!("invalid lane in scenario: {err}"))
}

fn open_board(store: &InMemoryKeyValueStore) -> TestBoard {
    Board::open(
        Arc::new(BoardStorage::new(Arc::new(store.clone()))),
        Arc::new(DefaultClock),
    )
}
