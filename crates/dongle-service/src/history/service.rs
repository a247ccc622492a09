//! History query and clear service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use dongle_core::error::AppError;
use dongle_entity::HistoryEntry;

use crate::access::DocumentAccess;

/// Reads and clears the transition history.
#[derive(Debug, Clone)]
pub struct HistoryService {
    /// Shared document accessor.
    access: Arc<DocumentAccess>,
}

impl HistoryService {
    /// Creates a new history service.
    pub fn new(access: Arc<DocumentAccess>) -> Self {
        Self { access }
    }

    /// History newest-first, optionally limited to one dongle.
    ///
    /// An empty filter means no filter. Returns an empty list if the store
    /// cannot be read.
    pub async fn list(&self, dongle_id: Option<&str>) -> Vec<HistoryEntry> {
        let document = self.access.read_or_empty().await;
        match dongle_id.filter(|id| !id.is_empty()) {
            Some(id) => document.history.for_dongle(id),
            None => document.history.to_vec(),
        }
    }

    /// Empties the history, leaving dongle states untouched.
    ///
    /// Returns when the history was cleared.
    pub async fn clear(&self) -> Result<DateTime<Utc>, AppError> {
        let removed = self
            .access
            .modify(|document| {
                let removed = document.history.len();
                document.history.clear();
                Ok(removed)
            })
            .await?;

        let cleared_at = Utc::now();
        info!(removed, "History cleared");
        Ok(cleared_at)
    }
}
