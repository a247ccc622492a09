//! Local filesystem JSON document store.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use dongle_core::error::{AppError, ErrorKind};
use dongle_core::result::AppResult;
use dongle_entity::DongleDocument;

use crate::provider::DocumentStore;

/// Sequence for temp file names, unique within the process.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Stores the document as a pretty-printed JSON file.
///
/// Writes go to a uniquely named sibling temp file that is then renamed over
/// the target, so readers only ever see a complete document. Loading never
/// writes: a missing file reads as the seed pool until the first save.
#[derive(Debug, Clone)]
pub struct LocalJsonStore {
    /// Path of the data file.
    path: PathBuf,
}

impl LocalJsonStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        name.push(format!(".{}.{seq}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    /// Ensure the parent directory of the data file exists.
    async fn ensure_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create data directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for LocalJsonStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn load(&self) -> AppResult<DongleDocument> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Data file missing, using seed pool");
                return Ok(DongleDocument::seeded());
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read data file: {}", self.path.display()),
                    e,
                ));
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Data file is corrupt: {}: {e}", self.path.display()),
                e,
            )
        })
    }

    async fn save(&self, document: &DongleDocument) -> AppResult<()> {
        self.ensure_parent().await?;

        let json = serde_json::to_vec_pretty(document)?;
        let temp = self.temp_path();

        fs::write(&temp, &json).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write data file: {}", temp.display()),
                e,
            )
        })?;
        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace data file: {}", self.path.display()),
                e,
            ));
        }

        debug!(path = %self.path.display(), bytes = json.len(), "Wrote data file");
        Ok(())
    }
}
