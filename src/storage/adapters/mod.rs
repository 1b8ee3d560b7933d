//! Adapter implementations for the key-value port.

pub mod directory;
pub mod memory;

pub use directory::DirectoryKeyValueStore;
pub use memory::InMemoryKeyValueStore;
