//! Drag-and-drop gesture handling.
//!
//! The external pointer sensor reports a gesture as a start, any number of
//! hovers, and an end. [`GestureController`] turns those reports into board
//! operations: hovering a different lane moves the task there immediately,
//! and the drop settles the gesture through [`Board::finish_gesture`] so it
//! produces at most one history entry.

use crate::history::domain::HistoryEntry;
use crate::storage::ports::KeyValueStore;
use crate::task::domain::{Lane, Task, TaskId};
use mockable::Clock;
use std::str::FromStr;
use tracing::debug;

use super::Board;

/// Pointer travel, in pixels, before a press becomes a drag.
///
/// Shorter travel is a click and never reaches the controller.
pub const ACTIVATION_DISTANCE_PX: u32 = 8;

/// What the pointer is over: a lane or another task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// A lane's drop zone.
    Lane(Lane),
    /// A task card.
    Task(TaskId),
}

impl DropTarget {
    /// Resolves an identifier reported by the sensor.
    ///
    /// Lane identifiers take precedence over task identifiers. Returns `None`
    /// for anything that is neither.
    #[must_use]
    pub fn resolve(id: &str) -> Option<Self> {
        Lane::try_from(id)
            .map(Self::Lane)
            .ok()
            .or_else(|| TaskId::from_str(id).ok().map(Self::Task))
    }
}

/// A gesture report from the pointer sensor, with raw identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorEvent<'a> {
    /// A drag passed the activation distance on `active`.
    DragStart {
        /// Identifier of the dragged card.
        active: &'a str,
    },
    /// The dragged card is over `over`, or over nothing.
    DragOver {
        /// Identifier of the dragged card.
        active: &'a str,
        /// Identifier under the pointer, if any.
        over: Option<&'a str>,
    },
    /// The card was released over `over`, or over nothing.
    DragEnd {
        /// Identifier of the dragged card.
        active: &'a str,
        /// Identifier under the pointer, if any.
        over: Option<&'a str>,
    },
}

/// Transient drag state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Snapshot of the dragged task, refreshed after each live move; used
        /// for the drag overlay.
        active: Task,
    },
}

/// Interprets sensor reports and drives the board accordingly.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    state: DragState,
}

impl GestureController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current drag state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn active_task(&self) -> Option<&Task> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { active } => Some(active),
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Handles a raw sensor report.
    ///
    /// Returns the history entry recorded by a drop, if any. Reports whose
    /// dragged identifier is not a task are ignored, except that a drag end
    /// always returns the controller to idle.
    pub fn handle<S, C>(
        &mut self,
        board: &mut Board<S, C>,
        event: SensorEvent<'_>,
    ) -> Option<HistoryEntry>
    where
        S: KeyValueStore,
        C: Clock,
    {
        match event {
            SensorEvent::DragStart { active } => {
                let id = TaskId::from_str(active).ok()?;
                self.drag_start(board, id);
                None
            }
            SensorEvent::DragOver { active, over } => {
                let id = TaskId::from_str(active).ok()?;
                self.drag_over(board, id, over.and_then(DropTarget::resolve));
                None
            }
            SensorEvent::DragEnd { active, over } => {
                let Ok(id) = TaskId::from_str(active) else {
                    self.abandon(board);
                    return None;
                };
                self.drag_end(board, id, over.and_then(DropTarget::resolve))
            }
        }
    }

    /// Starts dragging `active`.
    ///
    /// Opens the board's gesture ledger and snapshots the task. Any drag
    /// still in progress is abandoned first. Returns `false` when the task is
    /// unknown.
    pub fn drag_start<S, C>(&mut self, board: &mut Board<S, C>, active: TaskId) -> bool
    where
        S: KeyValueStore,
        C: Clock,
    {
        if self.is_dragging() {
            self.abandon(board);
        }
        if board.begin_gesture(active).is_none() {
            return false;
        }
        let Some(task) = board.task(active).cloned() else {
            board.cancel_gesture();
            return false;
        };
        debug!(task_id = %active, lane = %task.status(), "drag started");
        self.state = DragState::Dragging { active: task };
        true
    }

    /// Handles the dragged task hovering over `over`.
    ///
    /// Hovering a lane, or a task in a lane, other than the dragged task's
    /// current one moves the task there without recording history. Hovering
    /// nothing or the dragged task itself does nothing. Returns whether the
    /// task moved.
    pub fn drag_over<S, C>(
        &mut self,
        board: &mut Board<S, C>,
        active: TaskId,
        over: Option<DropTarget>,
    ) -> bool
    where
        S: KeyValueStore,
        C: Clock,
    {
        let DragState::Dragging { active: snapshot } = &mut self.state else {
            return false;
        };
        if snapshot.id() != active {
            return false;
        }
        let Some(lane) = over.and_then(|target| hovered_lane(board, active, target)) else {
            return false;
        };
        if !board.preview_move(active, lane) {
            return false;
        }
        if let Some(task) = board.task(active) {
            *snapshot = task.clone();
        }
        true
    }

    /// Handles the dragged task being released over `over`.
    ///
    /// The controller is idle afterwards whatever happens. Dropping on
    /// nothing, or on the dragged task itself, rolls back any live move and
    /// records nothing. Dropping on a lane settles the lane; dropping on a
    /// task settles that task's lane and positions the dragged task at the
    /// target's index. Returns the single entry the gesture recorded, if any.
    pub fn drag_end<S, C>(
        &mut self,
        board: &mut Board<S, C>,
        active: TaskId,
        over: Option<DropTarget>,
    ) -> Option<HistoryEntry>
    where
        S: KeyValueStore,
        C: Clock,
    {
        let DragState::Dragging { active: snapshot } = std::mem::take(&mut self.state) else {
            return None;
        };
        if snapshot.id() != active {
            board.cancel_gesture();
            return None;
        }

        let settled = match over {
            Some(DropTarget::Lane(lane)) => Some((lane, None)),
            Some(DropTarget::Task(target)) if target != active => board
                .task(target)
                .map(|task| (task.status(), Some(target))),
            Some(DropTarget::Task(_)) | None => None,
        };
        let Some((lane, drop_onto)) = settled else {
            let reverted = board.cancel_gesture();
            debug!(task_id = %active, reverted, "drop ignored");
            return None;
        };
        board.preview_move(active, lane);
        board.finish_gesture(drop_onto)
    }

    fn abandon<S, C>(&mut self, board: &mut Board<S, C>)
    where
        S: KeyValueStore,
        C: Clock,
    {
        self.state = DragState::Idle;
        board.cancel_gesture();
    }
}

/// Lane the pointer is effectively over, if it differs from a self-hover.
fn hovered_lane<S, C>(board: &Board<S, C>, active: TaskId, target: DropTarget) -> Option<Lane>
where
    S: KeyValueStore,
    C: Clock,
{
    match target {
        DropTarget::Lane(lane) => Some(lane),
        DropTarget::Task(id) if id == active => None,
        DropTarget::Task(id) => board.task(id).map(Task::status),
    }
}
