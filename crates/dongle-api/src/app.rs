//! Application builder: wires config, storage, services and auth into an Axum app.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;

use dongle_auth::SessionManager;
use dongle_core::config::AppConfig;
use dongle_core::result::AppResult;
use dongle_service::{DocumentAccess, DongleService, HistoryService};
use dongle_storage::DocumentStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared state from configuration, using the configured store.
pub fn build_state(config: AppConfig) -> AppResult<AppState> {
    let store = dongle_storage::from_config(&config.storage);
    build_state_with_store(config, store)
}

/// Builds the shared state on top of an existing document store.
pub fn build_state_with_store(
    config: AppConfig,
    store: Arc<dyn DocumentStore>,
) -> AppResult<AppState> {
    tracing::info!(provider = store.provider_type(), "Initializing document store");

    let access = Arc::new(DocumentAccess::new(store));
    let dongle_service = Arc::new(DongleService::new(Arc::clone(&access)));
    let history_service = Arc::new(HistoryService::new(access));

    let session_manager = Arc::new(SessionManager::new(&config.auth, &config.session)?);

    Ok(AppState {
        config: Arc::new(config),
        dongle_service,
        history_service,
        session_manager,
        started_at: Instant::now(),
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}
