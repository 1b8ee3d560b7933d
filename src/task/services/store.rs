//! Ordered task collection with write-through persistence.

use crate::storage::{ports::KeyValueStore, services::BoardStorage};
use crate::task::domain::{Lane, Task, TaskDomainError, TaskId, TaskPatch, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Owner of the board's task collection.
///
/// Collection order is the render order: within a lane, tasks appear in the
/// order they occupy here. Every mutation except [`TaskStore::load_all`]
/// writes the full resulting collection to storage.
#[derive(Debug)]
pub struct TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    tasks: Vec<Task>,
    storage: Arc<BoardStorage<S>>,
    clock: Arc<C>,
}

impl<S, C> TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Creates an empty store.
    #[must_use]
    pub const fn new(storage: Arc<BoardStorage<S>>, clock: Arc<C>) -> Self {
        Self {
            tasks: Vec::new(),
            storage,
            clock,
        }
    }

    /// Adds a task at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when `title` is blank; nothing
    /// is stored or written in that case.
    pub fn add(
        &mut self,
        title: &str,
        description: Option<&str>,
        status: Lane,
    ) -> Result<Task, TaskDomainError> {
        let title = TaskTitle::new(title)?;
        let task = Task::new(title, description.map(str::to_owned), status, &*self.clock);
        debug!(task_id = %task.id(), lane = %status, "task added");
        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Merges `patch` into the task with `id`.
    ///
    /// Returns the updated task, or `None` when no task has that id.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|task| task.id() == id)?;
        task.apply(patch, &*self.clock);
        let updated = task.clone();
        self.persist();
        Some(updated)
    }

    /// Removes the task with `id`, returning it when present.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        let removed = self.tasks.remove(position);
        debug!(task_id = %id, "task deleted");
        self.persist();
        Some(removed)
    }

    /// Moves the task with `id` into `lane`.
    ///
    /// Returns `false` when the id is unknown or the task is already in
    /// `lane`; nothing is written in either case.
    pub fn move_to(&mut self, id: TaskId, lane: Lane) -> bool {
        let clock = &*self.clock;
        let moved = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .is_some_and(|task| task.move_to(lane, clock));
        if moved {
            debug!(task_id = %id, lane = %lane, "task moved");
            self.persist();
        }
        moved
    }

    /// Returns the task with `id` to `lane` and resets its `updated_at`.
    ///
    /// Used to undo live moves without leaving a trace on the task. Writes
    /// once when anything changed; returns `false`, writing nothing, when the
    /// id is unknown or the task already matches.
    pub fn restore(&mut self, id: TaskId, lane: Lane, updated_at: DateTime<Utc>) -> bool {
        let restored = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .is_some_and(|task| task.restore(lane, updated_at));
        if restored {
            debug!(task_id = %id, lane = %lane, "task restored");
            self.persist();
        }
        restored
    }

    /// Rewrites the order of the tasks in `lane`.
    ///
    /// After the call, the tasks in `lane` appear in the order given by
    /// `order`; tasks in other lanes keep their slots. Ids that are not in
    /// `lane` and repeated ids are ignored, and lane tasks missing from
    /// `order` follow the listed ones in their previous relative order.
    ///
    /// Returns whether the lane order changed.
    pub fn reorder(&mut self, lane: Lane, order: &[TaskId]) -> bool {
        let current: Vec<TaskId> = self.tasks_in(lane).map(Task::id).collect();
        let sequence = reconcile_order(&current, order);
        let changed = sequence != current;

        let mut pending: HashMap<TaskId, Task> = HashMap::with_capacity(current.len());
        let mut slots: Vec<Option<Task>> = Vec::with_capacity(self.tasks.len());
        for task in self.tasks.drain(..) {
            if task.status() == lane {
                pending.insert(task.id(), task);
                slots.push(None);
            } else {
                slots.push(Some(task));
            }
        }
        let mut next_in_lane = sequence.into_iter();
        self.tasks = slots
            .into_iter()
            .filter_map(|slot| {
                slot.or_else(|| next_in_lane.next().and_then(|id| pending.remove(&id)))
            })
            .collect();

        debug!(lane = %lane, changed, "lane reordered");
        self.persist();
        changed
    }

    /// Replaces the collection with tasks loaded from storage.
    ///
    /// Does not write back.
    pub fn load_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Returns the ordered collection.
    #[must_use]
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Iterates the tasks in `lane` in render order.
    pub fn tasks_in(&self, lane: Lane) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.status() == lane)
    }

    /// Returns the lane of the task with `id` and its index within that lane.
    #[must_use]
    pub fn position_in_lane(&self, id: TaskId) -> Option<(Lane, usize)> {
        let lane = self.get(id)?.status();
        let index = self.tasks_in(lane).position(|task| task.id() == id)?;
        Some((lane, index))
    }

    fn persist(&self) {
        self.storage.save_tasks(&self.tasks);
    }
}

/// Builds the final lane order from a requested order, trusting only ids that
/// are currently in the lane.
fn reconcile_order(current: &[TaskId], requested: &[TaskId]) -> Vec<TaskId> {
    let members: HashSet<TaskId> = current.iter().copied().collect();
    let mut seen = HashSet::with_capacity(current.len());
    let mut sequence: Vec<TaskId> = requested
        .iter()
        .copied()
        .filter(|id| members.contains(id) && seen.insert(*id))
        .collect();
    sequence.extend(current.iter().copied().filter(|id| !seen.contains(id)));
    sequence
}
