//! Bounded, newest-first history log.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::HistoryEntry;

/// Number of entries the log retains.
pub const HISTORY_CAPACITY: usize = 100;

/// Newest-first ring buffer of history entries.
///
/// Appending past capacity silently drops the oldest entry. Serialized as a
/// plain JSON array; an over-long array is truncated to the newest entries
/// when read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    /// Creates an empty log with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Creates an empty log holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Inserts `entry` at the head, dropping the oldest entries beyond capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries for one dongle, newest first.
    pub fn for_dongle(&self, dongle_id: &str) -> Vec<HistoryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.dongle_id == dongle_id)
            .cloned()
            .collect()
    }

    /// All entries, newest first.
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Id for an entry recorded at `now`.
    ///
    /// Ids are epoch milliseconds, bumped past the newest entry's id when the
    /// clock has not moved on (or went backwards), so they stay unique and
    /// increasing.
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let floor = self
            .latest()
            .and_then(|entry| entry.id.parse::<i64>().ok())
            .map(|last| last + 1)
            .unwrap_or(i64::MIN);
        millis.max(floor).to_string()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<HistoryEntry>> for HistoryLog {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        let mut entries = VecDeque::from(entries);
        entries.truncate(HISTORY_CAPACITY);
        Self {
            entries,
            capacity: HISTORY_CAPACITY,
        }
    }
}

impl From<HistoryLog> for Vec<HistoryEntry> {
    fn from(log: HistoryLog) -> Self {
        log.entries.into()
    }
}
