//! Route definitions for the Dongle Tracker HTTP API.
//!
//! All routes are mounted under `/api`. Everything except auth and health
//! sits behind the shared-password session gate, enforced per handler by
//! the `AuthSession` extractor.

use std::time::Duration;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(dongle_routes())
        .merge(history_routes())
        .merge(status_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Auth endpoints: login, logout, session
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/session", get(handlers::auth::session))
}

/// Dongle listing and transitions
fn dongle_routes() -> Router<AppState> {
    Router::new()
        .route("/dongles", get(handlers::dongle::list_dongles))
        .route("/dongles/{id}/checkout", post(handlers::dongle::checkout))
        .route("/dongles/{id}/checkin", post(handlers::dongle::checkin))
}

fn history_routes() -> Router<AppState> {
    Router::new().route(
        "/history",
        get(handlers::history::list_history).delete(handlers::history::clear_history),
    )
}

fn status_routes() -> Router<AppState> {
    Router::new().route("/status", get(handlers::status::status))
}

/// Health check (no auth)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
