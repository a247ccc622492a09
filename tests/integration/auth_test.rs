//! Integration tests for the shared-password session gate.

use std::time::Duration;

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "password": crate::helpers::TEST_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(response.body.get("expiresAt").is_some());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid password");
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/auth/login", Some(serde_json::json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Password is required");
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::new();

    for (method, path) in [
        ("GET", "/api/dongles"),
        ("GET", "/api/history"),
        ("DELETE", "/api/history"),
        ("GET", "/api/status"),
        ("POST", "/api/dongles/davinci-developer/checkin"),
        ("GET", "/api/auth/session"),
    ] {
        let response = app.request(method, path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(response.body["code"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/dongles", None, Some("not-a-session"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Session expired or invalid");
}

#[tokio::test]
async fn test_session_and_logout() {
    let app = TestApp::new();
    let token = app.login().await;

    let session = app
        .request("GET", "/api/auth/session", None, Some(&token))
        .await;
    assert_eq!(session.status, StatusCode::OK);
    assert_eq!(session.body["authenticated"], true);

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    assert_eq!(logout.body["message"], "Logged out successfully");

    let after = app.request("GET", "/api/dongles", None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_session_past_absolute_timeout_is_rejected() {
    let app = TestApp::with_session_timeouts(Duration::from_secs(60), Duration::from_millis(300));
    let token = app.login().await;

    let fresh = app.request("GET", "/api/dongles", None, Some(&token)).await;
    assert_eq!(fresh.status, StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(600)).await;

    let stale = app.request("GET", "/api/dongles", None, Some(&token)).await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);
    assert_eq!(stale.body["error"], "Session expired or invalid");
}

#[tokio::test]
async fn test_idle_session_is_rejected() {
    let app = TestApp::with_session_timeouts(Duration::from_millis(300), Duration::from_secs(3600));
    let token = app.login().await;

    tokio::time::sleep(Duration::from_millis(600)).await;

    let idle = app.request("GET", "/api/status", None, Some(&token)).await;
    assert_eq!(idle.status, StatusCode::UNAUTHORIZED);

    let token = app.login().await;
    let active = app.request("GET", "/api/status", None, Some(&token)).await;
    assert_eq!(active.status, StatusCode::OK);
}
