//! Domain model for board tasks.
//!
//! The task domain models lanes, validated titles, and the task aggregate
//! while keeping persistence concerns outside of the domain boundary.

mod error;
mod ids;
mod lane;
mod task;

pub use error::{ParseLaneError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use lane::Lane;
pub use task::{Task, TaskPatch};
