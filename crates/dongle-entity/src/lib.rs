//! # dongle-entity
//!
//! Domain models for Dongle Tracker: the tagged dongle state, immutable
//! history entries, the bounded history log, and the persisted document
//! that bundles them.

pub mod document;
pub mod dongle;
pub mod history;

pub use document::DongleDocument;
pub use dongle::{Dongle, DongleState};
pub use history::{HistoryAction, HistoryEntry, HistoryLog};
