//! Session lifecycle manager: login, logout and validation.

use std::sync::Arc;

use tracing::{info, warn};

use dongle_core::config::{AuthConfig, SessionConfig};
use dongle_core::error::AppError;

use super::store::{Session, SessionStore};
use crate::password::SharedSecret;

/// Issues sessions to callers that present the shared password.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Hashed shared password.
    secret: Arc<SharedSecret>,
    /// Live sessions.
    store: SessionStore,
}

impl SessionManager {
    /// Creates a manager, hashing the configured shared password.
    pub fn new(auth: &AuthConfig, session: &SessionConfig) -> Result<Self, AppError> {
        if auth.uses_default_password() {
            warn!("The default shared password is in use; set auth.shared_password");
        }

        Ok(Self::with_store(
            SharedSecret::from_plaintext(&auth.shared_password)?,
            SessionStore::new(session),
        ))
    }

    /// Creates a manager from parts.
    pub fn with_store(secret: SharedSecret, store: SessionStore) -> Self {
        Self {
            secret: Arc::new(secret),
            store,
        }
    }

    /// Verifies the shared password and opens a session.
    pub async fn login(&self, password: &str) -> Result<Session, AppError> {
        if !self.secret.verify(password)? {
            warn!("Rejected login with wrong shared password");
            return Err(AppError::authentication("Invalid password"));
        }

        let session = self.store.create().await;
        info!(expires_at = %session.expires_at, "Session opened");
        Ok(session)
    }

    /// Closes the session identified by `token`.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        if !self.store.remove(token).await {
            return Err(AppError::authentication("Session not found"));
        }
        info!("Session closed");
        Ok(())
    }

    /// Resolves `token` to a live session.
    pub async fn validate(&self, token: &str) -> Result<Session, AppError> {
        self.store
            .get(token)
            .await
            .ok_or_else(|| AppError::authentication("Session expired or invalid"))
    }

    /// Number of live sessions.
    pub async fn active_sessions(&self) -> u64 {
        self.store.active_count().await
    }
}
