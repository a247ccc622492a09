//! Serialized access to the persisted document.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::error;

use dongle_core::result::AppResult;
use dongle_entity::DongleDocument;
use dongle_storage::DocumentStore;

/// Wraps a [`DocumentStore`] with a single-writer lock.
///
/// Every mutation loads the whole document, applies a change and saves it
/// while holding the lock, so concurrent requests cannot interleave their
/// read-modify-write cycles. Reads go straight to the store and never write.
#[derive(Debug)]
pub struct DocumentAccess {
    store: Arc<dyn DocumentStore>,
    write_lock: Mutex<()>,
}

impl DocumentAccess {
    /// Creates an accessor over `store`.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Provider type of the underlying store.
    pub fn provider_type(&self) -> &str {
        self.store.provider_type()
    }

    /// Loads the current document, falling back to an empty one if the store
    /// cannot be read.
    pub async fn read_or_empty(&self) -> DongleDocument {
        match self.store.load().await {
            Ok(document) => document,
            Err(e) => {
                error!(error = %e, "Failed to read data store, serving empty document");
                DongleDocument::default()
            }
        }
    }

    /// Runs `op` against the document and persists the result.
    ///
    /// Nothing is written if `op` fails.
    pub async fn modify<T, F>(&self, op: F) -> AppResult<T>
    where
        F: FnOnce(&mut DongleDocument) -> AppResult<T>,
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;
        let output = op(&mut document)?;
        self.store.save(&document).await?;
        Ok(output)
    }
}
