//! Dongle handlers: list, checkout, checkin.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use dongle_core::error::AppError;
use dongle_entity::Dongle;

use crate::dto::request::CheckoutRequest;
use crate::dto::response::TransitionResponse;
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// GET /api/dongles
pub async fn list_dongles(
    State(state): State<AppState>,
    _auth: AuthSession,
) -> Json<BTreeMap<String, Dongle>> {
    Json(state.dongle_service.list().await)
}

/// POST /api/dongles/{id}/checkout
pub async fn checkout(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(dongle_id): Path<String>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<TransitionResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;

    let transition = state
        .dongle_service
        .checkout(&dongle_id, &req.user_name, &req.location)
        .await?;

    Ok(Json(TransitionResponse::new(transition, "checked out")))
}

/// POST /api/dongles/{id}/checkin
pub async fn checkin(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(dongle_id): Path<String>,
) -> Result<Json<TransitionResponse>, ApiError> {
    let transition = state.dongle_service.checkin(&dongle_id).await?;
    Ok(Json(TransitionResponse::new(transition, "checked in")))
}
