//! In-memory session storage with idle and absolute expiry.

use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dongle_core::config::SessionConfig;

/// A logged-in browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// Hard expiry, regardless of activity.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the absolute lifetime has elapsed at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Token → session map backed by moka.
///
/// moka evicts entries that have been idle longer than the idle timeout or
/// that outlived the absolute timeout; `expires_at` is checked again on read
/// because eviction is lazy.
#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: Cache<String, Session>,
    absolute_ttl: Duration,
}

impl SessionStore {
    /// Creates a store from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_timeouts(
            Duration::from_secs(config.idle_timeout_minutes * 60),
            Duration::from_secs(config.absolute_timeout_hours * 3600),
            config.max_sessions,
        )
    }

    /// Creates a store with explicit timeouts.
    pub fn with_timeouts(idle: Duration, absolute: Duration, max_sessions: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle)
            .time_to_live(absolute)
            .build();

        Self {
            cache,
            absolute_ttl: absolute,
        }
    }

    /// Issues a fresh session.
    pub async fn create(&self) -> Session {
        let now = Utc::now();
        let ttl = chrono::Duration::from_std(self.absolute_ttl)
            .unwrap_or_else(|_| chrono::Duration::hours(12));
        let session = Session {
            token: Uuid::new_v4().simple().to_string(),
            created_at: now,
            expires_at: now + ttl,
        };

        self.cache
            .insert(session.token.clone(), session.clone())
            .await;
        session
    }

    /// Looks up a live session, refreshing its idle timer.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let session = self.cache.get(token).await?;
        if session.is_expired_at(Utc::now()) {
            self.cache.invalidate(token).await;
            return None;
        }
        Some(session)
    }

    /// Drops a session. Returns whether it existed.
    pub async fn remove(&self, token: &str) -> bool {
        self.cache.remove(token).await.is_some()
    }

    /// Number of live sessions.
    pub async fn active_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
