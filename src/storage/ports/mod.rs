//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by storage services.

mod key_value;

#[cfg(test)]
pub(crate) use key_value::MockKeyValueStore;
pub use key_value::{KeyValueError, KeyValueResult, KeyValueStore};
