//! Pool status handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::StatusResponse;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// GET /api/status
pub async fn status(State(state): State<AppState>, _auth: AuthSession) -> Json<StatusResponse> {
    Json(state.dongle_service.status().await.into())
}
