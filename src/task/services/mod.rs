//! Application services for the task collection.

mod store;

pub use store::TaskStore;
