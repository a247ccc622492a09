//! Dongle checkout/checkin service.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use dongle_core::error::AppError;
use dongle_entity::Dongle;

use super::transition::{self, Transition};
use crate::access::DocumentAccess;

/// Point-in-time overview of the pool.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    /// When the snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// Every dongle by id.
    pub dongles: BTreeMap<String, Dongle>,
    /// Size of the pool.
    pub total_dongles: usize,
    /// How many are checked out.
    pub checked_out: usize,
}

/// Applies checkout/checkin transitions and reports dongle state.
#[derive(Debug, Clone)]
pub struct DongleService {
    /// Shared document accessor.
    access: Arc<DocumentAccess>,
}

impl DongleService {
    /// Creates a new dongle service.
    pub fn new(access: Arc<DocumentAccess>) -> Self {
        Self { access }
    }

    /// Writes the current document back under the writer lock, so a
    /// missing data file is created with the seed pool at startup.
    pub async fn initialize(&self) -> Result<(), AppError> {
        let (dongles, checked_out, history) = self
            .access
            .modify(|document| {
                Ok((
                    document.dongles.len(),
                    document.checked_out_count(),
                    document.history.len(),
                ))
            })
            .await?;
        info!(
            provider = self.access.provider_type(),
            dongles, checked_out, history, "Data store ready"
        );
        Ok(())
    }

    /// Every dongle by id; empty if the store cannot be read.
    pub async fn list(&self) -> BTreeMap<String, Dongle> {
        self.access.read_or_empty().await.dongles
    }

    /// Pool overview; empty if the store cannot be read.
    pub async fn status(&self) -> StatusSnapshot {
        let document = self.access.read_or_empty().await;
        StatusSnapshot {
            timestamp: Utc::now(),
            total_dongles: document.dongles.len(),
            checked_out: document.checked_out_count(),
            dongles: document.dongles,
        }
    }

    /// Checks a dongle out to `user_name` sitting at `location`.
    pub async fn checkout(
        &self,
        dongle_id: &str,
        user_name: &str,
        location: &str,
    ) -> Result<Transition, AppError> {
        let (user_name, location) = transition::validate_checkout_input(user_name, location)?;

        let result = self
            .access
            .modify(|document| {
                transition::check_out(document, dongle_id, &user_name, &location, Utc::now())
            })
            .await;

        match &result {
            Ok(_) => info!(dongle_id, user = %user_name, location = %location, "Dongle checked out"),
            Err(e) => warn!(dongle_id, user = %user_name, error = %e, "Checkout rejected"),
        }
        result
    }

    /// Returns a checked-out dongle.
    pub async fn checkin(&self, dongle_id: &str) -> Result<Transition, AppError> {
        let result = self
            .access
            .modify(|document| transition::check_in(document, dongle_id, Utc::now()))
            .await;

        match &result {
            Ok(t) => info!(dongle_id, user = %t.entry.user_name, "Dongle checked in"),
            Err(e) => warn!(dongle_id, error = %e, "Checkin rejected"),
        }
        result
    }
}
