//! # dongle-storage
//!
//! Persistence for the tracker document. The [`DocumentStore`] trait is
//! implemented by a local JSON-file provider for production and an
//! in-memory provider for tests.

pub mod provider;
pub mod providers;

pub use provider::DocumentStore;
pub use providers::{LocalJsonStore, MemoryStore, from_config};
