//! Recent board activity.
//!
//! A short, lossy log of user-visible changes. Entries snapshot the task
//! title at the time of the action, so they remain readable after the task
//! is renamed or deleted.
//!
//! - Entry types and the capacity constant in [`domain`]
//! - The bounded, write-through log in [`services`]

pub mod domain;
pub mod services;
