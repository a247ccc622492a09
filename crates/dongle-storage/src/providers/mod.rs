//! Document store provider implementations.

pub mod local;
pub mod memory;

use std::sync::Arc;

use dongle_core::config::{StorageConfig, StorageProviderKind};

pub use local::LocalJsonStore;
pub use memory::MemoryStore;

use crate::provider::DocumentStore;

/// Builds the provider selected in configuration.
pub fn from_config(config: &StorageConfig) -> Arc<dyn DocumentStore> {
    match config.provider {
        StorageProviderKind::Local => Arc::new(LocalJsonStore::new(&config.data_file)),
        StorageProviderKind::Memory => Arc::new(MemoryStore::new()),
    }
}
