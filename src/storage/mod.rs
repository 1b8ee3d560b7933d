//! Local persistence for the board.
//!
//! Collections are stored as JSON arrays under two keys of a synchronous
//! key-value store. Storage is a best-effort side channel: read and write
//! failures are logged and downgraded, never surfaced to board operations.
//!
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Serialization and key configuration in [`services`]

pub mod adapters;
pub mod ports;
pub mod services;
