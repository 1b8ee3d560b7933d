//! Application services for the activity log.

mod log;

pub use log::HistoryLog;
