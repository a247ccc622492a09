//! Auth handlers: login, logout, session.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use validator::Validate;

use dongle_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{LoginResponse, MessageResponse, SessionResponse};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    req.validate()?;

    let session = state.session_manager.login(&req.password).await?;

    Ok(Json(LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
    }))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<MessageResponse>, ApiError> {
    state.session_manager.logout(auth.token()).await?;

    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// GET /api/auth/session
pub async fn session(auth: AuthSession) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: true,
        expires_at: auth.0.expires_at,
    })
}
