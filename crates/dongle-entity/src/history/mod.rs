//! History domain entities.

pub mod entry;
pub mod log;

pub use entry::{HistoryAction, HistoryEntry};
pub use log::{HISTORY_CAPACITY, HistoryLog};
