//! The persisted tracker document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dongle::{Dongle, default_pool};
use crate::history::HistoryLog;

/// Everything the tracker persists: dongle states plus history.
///
/// Read and rewritten wholesale on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DongleDocument {
    /// Dongle id → dongle.
    #[serde(default)]
    pub dongles: BTreeMap<String, Dongle>,
    /// Transition history, newest first.
    #[serde(default)]
    pub history: HistoryLog,
}

impl DongleDocument {
    /// A fresh document holding the seed pool and no history.
    pub fn seeded() -> Self {
        Self {
            dongles: default_pool(),
            history: HistoryLog::new(),
        }
    }

    /// Number of dongles currently checked out.
    pub fn checked_out_count(&self) -> usize {
        self.dongles.values().filter(|d| d.is_checked_out()).count()
    }
}
