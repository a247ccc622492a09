//! In-memory document store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dongle_core::result::AppResult;
use dongle_entity::DongleDocument;

use crate::provider::DocumentStore;

/// Keeps the document in process memory. Contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Arc<RwLock<Option<DongleDocument>>>,
}

impl MemoryStore {
    /// Creates an empty store that reads as the seed pool until the first save.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `document`.
    pub fn with_document(document: DongleDocument) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(document))),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn load(&self) -> AppResult<DongleDocument> {
        Ok(self
            .document
            .read()
            .await
            .clone()
            .unwrap_or_else(DongleDocument::seeded))
    }

    async fn save(&self, document: &DongleDocument) -> AppResult<()> {
        *self.document.write().await = Some(document.clone());
        Ok(())
    }
}
