//! Document store trait for pluggable persistence backends.

use async_trait::async_trait;

use dongle_core::result::AppResult;
use dongle_entity::DongleDocument;

/// Whole-document persistence.
///
/// Callers read the full document, mutate it in memory and write it back.
/// Implementations do no locking of their own; serializing writers is the
/// caller's job.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "memory").
    fn provider_type(&self) -> &str;

    /// Read the document, seeding and persisting the default pool if none exists yet.
    async fn load(&self) -> AppResult<DongleDocument>;

    /// Replace the stored document.
    async fn save(&self, document: &DongleDocument) -> AppResult<()>;
}
