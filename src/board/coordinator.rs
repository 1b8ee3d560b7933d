//! The board: task store and activity log kept in step.
//!
//! Every user-visible change goes through [`Board`], which applies it to the
//! task store and records exactly one history entry for it. A drag gesture
//! may touch the store several times (live lane changes while hovering, a
//! final reorder on drop) but still yields at most one entry; the per-gesture
//! ledger opened by [`Board::begin_gesture`] tracks whether that entry has
//! already been written.

use crate::history::{
    domain::{HistoryAction, HistoryEntry},
    services::HistoryLog,
};
use crate::storage::{ports::KeyValueStore, services::BoardStorage};
use crate::task::{
    domain::{Lane, Task, TaskId, TaskPatch},
    services::TaskStore,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

use super::events::{BoardEvent, Observers, SubscriptionId};
use super::view::{Column, group_by_lane};
use super::{BoardResult, filter_tasks};

/// State of the gesture currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GestureLedger {
    task: TaskId,
    start_lane: Lane,
    start_updated_at: DateTime<Utc>,
    history_recorded: bool,
}

/// Single owner of the board's tasks and activity log.
#[derive(Debug)]
pub struct Board<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    tasks: TaskStore<S, C>,
    history: HistoryLog<S, C>,
    gesture: Option<GestureLedger>,
    observers: Observers,
}

impl<S, C> Board<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Creates an empty board backed by `storage`.
    #[must_use]
    pub fn new(storage: Arc<BoardStorage<S>>, clock: Arc<C>) -> Self {
        Self {
            tasks: TaskStore::new(Arc::clone(&storage), Arc::clone(&clock)),
            history: HistoryLog::new(storage, clock),
            gesture: None,
            observers: Observers::default(),
        }
    }

    /// Creates a board populated from `storage`.
    ///
    /// Unreadable or malformed stored data yields an empty collection; the
    /// loaded data is not written back.
    #[must_use]
    pub fn open(storage: Arc<BoardStorage<S>>, clock: Arc<C>) -> Self {
        let tasks = storage.load_tasks();
        let history = storage.load_history();
        let mut board = Self::new(storage, clock);
        board.tasks.load_all(tasks);
        board.history.load_all(history);
        debug!(
            tasks = board.tasks.list().len(),
            history = board.history.len(),
            "board opened"
        );
        board
    }

    /// Returns all tasks in render order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.list()
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Returns the underlying task store for read access.
    #[must_use]
    pub const fn task_store(&self) -> &TaskStore<S, C> {
        &self.tasks
    }

    /// Returns the activity log for read access.
    #[must_use]
    pub const fn history(&self) -> &HistoryLog<S, C> {
        &self.history
    }

    /// Returns the tasks matching `keyword`; see [`filter_tasks`].
    #[must_use]
    pub fn filter(&self, keyword: &str) -> Vec<&Task> {
        filter_tasks(self.tasks.list(), keyword)
    }

    /// Returns the three lanes with their tasks.
    #[must_use]
    pub fn columns(&self) -> Vec<Column<'_>> {
        group_by_lane(self.tasks.list())
    }

    /// Returns the three lanes with only the tasks matching `keyword`.
    #[must_use]
    pub fn columns_matching(&self, keyword: &str) -> Vec<Column<'_>> {
        group_by_lane(self.filter(keyword))
    }

    /// Registers `observer` to be told about every effective change.
    pub fn subscribe(&mut self, observer: impl FnMut(BoardEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Adds a task and records a `created` entry.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`](super::BoardError::Domain) when the
    /// title is blank; nothing is stored or recorded in that case.
    pub fn add_task(
        &mut self,
        title: &str,
        description: Option<&str>,
        lane: Lane,
    ) -> BoardResult<Task> {
        let task = self.tasks.add(title, description, lane)?;
        self.observers.notify(BoardEvent::TasksChanged);
        self.record(HistoryAction::Created, task.title().as_str(), None);
        Ok(task)
    }

    /// Applies `patch` and records an `updated` entry.
    ///
    /// Every call on a known task refreshes its `updated_at` and records one
    /// entry, even when the patch repeats current values. When the title
    /// changes, the entry's details hold the previous title. Returns `None`,
    /// recording nothing, when the id is unknown.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> Option<Task> {
        let previous_title = self.tasks.get(id)?.title().clone();
        let updated = self.tasks.update(id, patch)?;
        self.observers.notify(BoardEvent::TasksChanged);
        let details = (updated.title() != &previous_title).then(|| previous_title.to_string());
        self.record(HistoryAction::Updated, updated.title().as_str(), details);
        Some(updated)
    }

    /// Deletes a task and records a `deleted` entry.
    ///
    /// Returns `None` when the id is unknown.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.tasks.delete(id)?;
        self.observers.notify(BoardEvent::TasksChanged);
        self.record(HistoryAction::Deleted, removed.title().as_str(), None);
        Some(removed)
    }

    /// Moves a task to `lane` outside of a drag gesture and records a `moved`
    /// entry.
    ///
    /// Returns `false`, recording nothing, when the id is unknown or the task
    /// is already in `lane`.
    pub fn move_task(&mut self, id: TaskId, lane: Lane) -> bool {
        if !self.tasks.move_to(id, lane) {
            return false;
        }
        self.observers.notify(BoardEvent::TasksChanged);
        if let Some(title) = self.title_of(id) {
            self.record(HistoryAction::Moved, &title, Some(lane.title().to_owned()));
        }
        true
    }

    /// Moves a task to `index` within its lane outside of a drag gesture and
    /// records a `reordered` entry.
    ///
    /// Indexes past the end of the lane place the task last. Returns `false`,
    /// recording nothing, when the id is unknown or the position would not
    /// change.
    pub fn reposition_task(&mut self, id: TaskId, index: usize) -> bool {
        let Some(lane) = self.reposition(id, index) else {
            return false;
        };
        self.observers.notify(BoardEvent::TasksChanged);
        if let Some(title) = self.title_of(id) {
            self.record(HistoryAction::Reordered, &title, Some(within(lane)));
        }
        true
    }

    /// Empties the activity log.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.observers.notify(BoardEvent::HistoryChanged);
    }

    /// Opens the ledger for a drag gesture on `id`.
    ///
    /// Captures the task's lane and `updated_at` at gesture start and resets
    /// the "history recorded" flag. A gesture left open by a previous drag is cancelled
    /// first. Returns the start lane, or `None` when the id is unknown.
    pub fn begin_gesture(&mut self, id: TaskId) -> Option<Lane> {
        let task = self.tasks.get(id)?;
        let start_lane = task.status();
        let start_updated_at = task.updated_at();
        if self.gesture.is_some() {
            self.cancel_gesture();
        }
        self.gesture = Some(GestureLedger {
            task: id,
            start_lane,
            start_updated_at,
            history_recorded: false,
        });
        Some(start_lane)
    }

    /// Returns the start lane of the gesture in flight, if any.
    #[must_use]
    pub fn gesture_start_lane(&self) -> Option<Lane> {
        self.gesture.map(|ledger| ledger.start_lane)
    }

    /// Moves the dragged task into `lane` for live feedback, without
    /// recording history.
    ///
    /// Only acts on the task of the open gesture, and only when its current
    /// lane differs from `lane`. Returns whether the task moved.
    pub fn preview_move(&mut self, id: TaskId, lane: Lane) -> bool {
        if self.gesture.map(|ledger| ledger.task) != Some(id) {
            return false;
        }
        let moved = self.tasks.move_to(id, lane);
        if moved {
            self.observers.notify(BoardEvent::TasksChanged);
        }
        moved
    }

    /// Closes the open gesture after a drop and records its single entry.
    ///
    /// A task that ends in a different lane than it started in gets a
    /// `moved` entry naming the destination lane. When `drop_onto` is another
    /// task in that final lane and the dragged task's index changes, the lane
    /// is reordered; a `reordered` entry is written only if the gesture has
    /// not recorded anything yet. Returns the recorded entry, if any.
    pub fn finish_gesture(&mut self, drop_onto: Option<TaskId>) -> Option<HistoryEntry> {
        let mut ledger = self.gesture.take()?;
        let task = self.tasks.get(ledger.task)?;
        let final_lane = task.status();
        let title = task.title().as_str().to_owned();
        let mut recorded = None;

        if final_lane != ledger.start_lane {
            recorded = Some(self.record(
                HistoryAction::Moved,
                &title,
                Some(final_lane.title().to_owned()),
            ));
            ledger.history_recorded = true;
        }

        let target_index = drop_onto
            .filter(|target| *target != ledger.task)
            .and_then(|target| self.tasks.position_in_lane(target))
            .and_then(|(lane, index)| (lane == final_lane).then_some(index));
        if let Some(index) = target_index
            && self.reposition(ledger.task, index).is_some()
        {
            self.observers.notify(BoardEvent::TasksChanged);
            if !ledger.history_recorded {
                recorded = Some(self.record(
                    HistoryAction::Reordered,
                    &title,
                    Some(within(final_lane)),
                ));
                ledger.history_recorded = true;
            }
        }

        debug!(
            task_id = %ledger.task,
            from = %ledger.start_lane,
            to = %final_lane,
            recorded = ledger.history_recorded,
            "gesture finished"
        );
        recorded
    }

    /// Closes the open gesture without a drop, returning the task to its
    /// start lane and start `updated_at` if a preview touched it.
    ///
    /// The task ends up exactly as it was when the gesture began. Returns
    /// whether a preview had to be rolled back.
    pub fn cancel_gesture(&mut self) -> bool {
        let Some(ledger) = self.gesture.take() else {
            return false;
        };
        let reverted = self
            .tasks
            .restore(ledger.task, ledger.start_lane, ledger.start_updated_at);
        if reverted {
            self.observers.notify(BoardEvent::TasksChanged);
        }
        debug!(task_id = %ledger.task, reverted, "gesture cancelled");
        reverted
    }

    /// Moves `id` to `index` within its lane, returning the lane when the
    /// order changed.
    fn reposition(&mut self, id: TaskId, index: usize) -> Option<Lane> {
        let (lane, from) = self.tasks.position_in_lane(id)?;
        let mut order: Vec<TaskId> = self.tasks.tasks_in(lane).map(Task::id).collect();
        let to = index.min(order.len().saturating_sub(1));
        if from == to {
            return None;
        }
        let dragged = order.remove(from);
        order.insert(to, dragged);
        self.tasks.reorder(lane, &order).then_some(lane)
    }

    fn title_of(&self, id: TaskId) -> Option<String> {
        self.tasks.get(id).map(|task| task.title().as_str().to_owned())
    }

    fn record(
        &mut self,
        action: HistoryAction,
        task_title: &str,
        details: Option<String>,
    ) -> HistoryEntry {
        let entry = self.history.append(action, task_title, details);
        self.observers.notify(BoardEvent::HistoryChanged);
        entry
    }
}

/// Details text for an in-lane reorder.
fn within(lane: Lane) -> String {
    format!("within {}", lane.title())
}
