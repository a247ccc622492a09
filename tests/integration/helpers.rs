//! Shared test helpers for integration tests.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use dongle_auth::{SessionManager, SessionStore, SharedSecret};
use dongle_core::config::{AppConfig, StorageProviderKind};
use dongle_storage::{DocumentStore, LocalJsonStore, MemoryStore};

/// Shared password used by every test app.
pub const TEST_PASSWORD: &str = "test-password";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application backed by an in-memory store
    pub fn new() -> Self {
        let mut config = Self::test_config();
        config.storage.provider = StorageProviderKind::Memory;
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    /// Create a test application backed by a JSON file at `path`
    pub fn with_data_file(path: &Path) -> Self {
        let mut config = Self::test_config();
        config.storage.provider = StorageProviderKind::Local;
        config.storage.data_file = path.to_string_lossy().into_owned();
        Self::with_store(config, Arc::new(LocalJsonStore::new(path)))
    }

    /// Create an in-memory test application whose sessions expire after
    /// `idle` without use or `absolute` after login
    pub fn with_session_timeouts(idle: Duration, absolute: Duration) -> Self {
        let mut config = Self::test_config();
        config.storage.provider = StorageProviderKind::Memory;

        let mut state =
            dongle_api::build_state_with_store(config.clone(), Arc::new(MemoryStore::new()))
                .expect("Failed to build state");
        state.session_manager = Arc::new(SessionManager::with_store(
            SharedSecret::from_plaintext(TEST_PASSWORD).expect("Failed to hash password"),
            SessionStore::with_timeouts(idle, absolute, 100),
        ));

        let router = dongle_api::build_app(state);
        Self { router, config }
    }

    fn with_store(config: AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        let state = dongle_api::build_state_with_store(config.clone(), store)
            .expect("Failed to build state");
        let router = dongle_api::build_app(state);
        Self { router, config }
    }

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.auth.shared_password = TEST_PASSWORD.to_string();
        config
    }

    /// Login with the shared password and return the bearer token
    pub async fn login(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "password": TEST_PASSWORD })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Check out `dongle_id` and return the response
    pub async fn checkout(
        &self,
        token: &str,
        dongle_id: &str,
        user_name: &str,
        location: &str,
    ) -> TestResponse {
        self.request(
            "POST",
            &format!("/api/dongles/{dongle_id}/checkout"),
            Some(serde_json::json!({ "userName": user_name, "location": location })),
            Some(token),
        )
        .await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(t) = token {
            req = req.header("Authorization", format!("Bearer {t}"));
        }

        let req = req.body(Body::from(body_str)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Test response wrapper
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as JSON
    pub body: Value,
}
