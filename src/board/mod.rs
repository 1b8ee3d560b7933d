//! The interactive board.
//!
//! [`Board`] owns the task store and the activity log and is the only way
//! to change either. It guarantees that each user action, including a whole
//! drag-and-drop gesture, leaves exactly one history entry behind (or none,
//! when nothing changed).
//!
//! - [`GestureController`] interprets pointer sensor reports
//! - [`filter_tasks`] and [`Column`] provide read-only views for rendering
//! - [`BoardEvent`] notifications let views stay in sync

mod coordinator;
mod error;
mod events;
mod filter;
mod gesture;
mod view;

pub use coordinator::Board;
pub use error::{BoardError, BoardResult};
pub use events::{BoardEvent, SubscriptionId};
pub use filter::filter_tasks;
pub use gesture::{ACTIVATION_DISTANCE_PX, DragState, DropTarget, GestureController, SensorEvent};
pub use view::{Column, group_by_lane, relative_time};

#[cfg(test)]
mod tests;
