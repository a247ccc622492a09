//! History entry entity model.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Which transition a history entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    /// A dongle was taken.
    Checkout,
    /// A dongle was returned.
    Checkin,
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checkout => write!(f, "checkout"),
            Self::Checkin => write!(f, "checkin"),
        }
    }
}

/// Immutable audit record of one dongle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Time-derived identifier (epoch milliseconds).
    pub id: String,
    /// Dongle the transition applied to.
    pub dongle_id: String,
    /// Dongle display name at the time of the action.
    pub dongle_name: String,
    /// Checkout or checkin.
    pub action: HistoryAction,
    /// Person taking or returning the dongle.
    pub user_name: String,
    /// Desk location, when known.
    pub location: Option<String>,
    /// When the transition happened.
    pub timestamp: DateTime<Utc>,
    /// Human-readable date in server-local time.
    pub date: String,
    /// Human-readable time of day in server-local time.
    pub time: String,
}

impl HistoryEntry {
    /// Builds an entry, deriving the display `date`/`time` from `timestamp`.
    pub fn new(
        id: impl Into<String>,
        dongle_id: impl Into<String>,
        dongle_name: impl Into<String>,
        action: HistoryAction,
        user_name: impl Into<String>,
        location: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let local = timestamp.with_timezone(&Local);
        Self {
            id: id.into(),
            dongle_id: dongle_id.into(),
            dongle_name: dongle_name.into(),
            action,
            user_name: user_name.into(),
            location,
            timestamp,
            date: local.format("%-m/%-d/%Y").to_string(),
            time: local.format("%-I:%M:%S %p").to_string(),
        }
    }
}
