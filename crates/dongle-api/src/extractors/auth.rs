//! `AuthSession` extractor: pulls the bearer token from the Authorization header and validates it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use dongle_auth::Session;
use dongle_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// A validated session, available in handlers behind the shared-password gate.
#[derive(Debug, Clone)]
pub struct AuthSession(pub Session);

impl AuthSession {
    /// The session token.
    pub fn token(&self) -> &str {
        &self.0.token
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Authentication required"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let session = state.session_manager.validate(token).await?;
        Ok(AuthSession(session))
    }
}
