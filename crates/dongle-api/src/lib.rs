//! # dongle-api
//!
//! HTTP API layer for Dongle Tracker built on Axum.
//!
//! Provides the REST endpoints, the session extractor, middleware (CORS,
//! request logging) and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, build_state_with_store};
pub use error::ApiError;
pub use state::AppState;
