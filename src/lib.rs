//! Taskboard: the engine behind a three-lane kanban board.
//!
//! The crate keeps a list of tasks spread across the "To Do", "In Progress"
//! and "Done" lanes, a short log of recent activity, and both of them in a
//! key-value store so the board survives restarts. Rendering and pointer
//! input live outside the crate; it consumes their reports and exposes
//! read-only views back to them.
//!
//! # Architecture
//!
//! Each module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, directory)
//! - **Services**: Stateful collections built on the domain and ports
//!
//! # Modules
//!
//! - [`task`]: Task aggregate and the ordered task store
//! - [`history`]: Bounded activity log
//! - [`storage`]: Key-value persistence of tasks and history
//! - [`board`]: Coordination of store and log, drag gestures, and views

pub mod board;
pub mod history;
pub mod storage;
pub mod task;

#[cfg(test)]
mod test_support;
