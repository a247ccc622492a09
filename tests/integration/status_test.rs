//! Integration tests for the pool status summary.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_status_counts() {
    let app = TestApp::new();
    let token = app.login().await;

    app.checkout(&token, "davinci-configurator-2", "Carol", "Lab")
        .await;

    let response = app.request("GET", "/api/status", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalDongles"], 3);
    assert_eq!(response.body["checkedOut"], 1);
    assert!(response.body["timestamp"].is_string());
    assert_eq!(
        response.body["dongles"]["davinci-configurator-2"]["checkedOutBy"],
        "Carol"
    );
}
