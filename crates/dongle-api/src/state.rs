//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use dongle_auth::SessionManager;
use dongle_core::config::AppConfig;
use dongle_service::{DongleService, HistoryService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Dongle checkout/checkin service
    pub dongle_service: Arc<DongleService>,
    /// History service
    pub history_service: Arc<HistoryService>,
    /// Shared-password session manager
    pub session_manager: Arc<SessionManager>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}
