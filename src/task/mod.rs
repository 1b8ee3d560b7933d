//! Board tasks and the store that owns them.
//!
//! The module follows the crate's layered layout:
//!
//! - Domain types (lanes, titles, the task aggregate) in [`domain`]
//! - The ordered, write-through task collection in [`services`]

pub mod domain;
pub mod services;
