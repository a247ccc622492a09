//! # dongle-service
//!
//! Business logic for Dongle Tracker. Services share one [`DocumentAccess`]
//! so every mutation runs its read-modify-write cycle under a single writer
//! lock.
//!
//! Services follow constructor injection: dependencies are provided at
//! construction time via `Arc` references.

pub mod access;
pub mod dongle;
pub mod history;

pub use access::DocumentAccess;
pub use dongle::{DongleService, StatusSnapshot, Transition};
pub use history::HistoryService;
