//! History handlers: list and clear.

use axum::Json;
use axum::extract::{Query, State};

use dongle_entity::HistoryEntry;

use crate::dto::request::HistoryQuery;
use crate::dto::response::ClearHistoryResponse;
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// GET /api/history?dongleId=
pub async fn list_history(
    State(state): State<AppState>,
    _auth: AuthSession,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<HistoryEntry>> {
    Json(state.history_service.list(query.dongle_id.as_deref()).await)
}

/// DELETE /api/history
pub async fn clear_history(
    State(state): State<AppState>,
    _auth: AuthSession,
) -> Result<Json<ClearHistoryResponse>, ApiError> {
    let cleared_at = state.history_service.clear().await?;
    Ok(Json(ClearHistoryResponse {
        message: "History cleared successfully".to_string(),
        cleared_at,
    }))
}
