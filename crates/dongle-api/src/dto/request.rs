//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// The shared password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Checkout request body.
///
/// Missing fields deserialize as empty strings so the service rejects them
/// the same way as blank ones, after trimming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Person taking the dongle.
    #[serde(default)]
    pub user_name: String,
    /// Desk location.
    #[serde(default)]
    pub location: String,
}

/// Query parameters for `GET /api/history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    /// Only return entries for this dongle.
    pub dongle_id: Option<String>,
}
