//! Response DTOs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dongle_entity::{Dongle, HistoryEntry};
use dongle_service::{StatusSnapshot, Transition};

/// Result of a checkout or checkin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResponse {
    /// Human-readable summary.
    pub message: String,
    /// Dongle after the transition.
    pub dongle: Dongle,
    /// Recorded history entry.
    pub history_entry: HistoryEntry,
}

impl TransitionResponse {
    /// Builds the response for `transition`, e.g. "DaVinci Developer checked out".
    pub fn new(transition: Transition, verb: &str) -> Self {
        Self {
            message: format!("{} {verb} successfully", transition.dongle.name),
            dongle: transition.dongle,
            history_entry: transition.entry,
        }
    }
}

/// Result of clearing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearHistoryResponse {
    /// Message.
    pub message: String,
    /// When the history was cleared.
    pub cleared_at: DateTime<Utc>,
}

/// Pool status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// When the status was taken.
    pub timestamp: DateTime<Utc>,
    /// Every dongle by id.
    pub dongles: BTreeMap<String, Dongle>,
    /// Pool size.
    pub total_dongles: usize,
    /// Checked-out count.
    pub checked_out: usize,
}

impl From<StatusSnapshot> for StatusResponse {
    fn from(snapshot: StatusSnapshot) -> Self {
        Self {
            timestamp: snapshot.timestamp,
            dongles: snapshot.dongles,
            total_dongles: snapshot.total_dongles,
            checked_out: snapshot.checked_out,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Hard expiry of the session.
    pub expires_at: DateTime<Utc>,
}

/// Current session info.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Always true; unauthenticated callers get a 401 instead.
    pub authenticated: bool,
    /// Hard expiry of the session.
    pub expires_at: DateTime<Utc>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
}
