//! Integration tests against the JSON data file.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("dongles.json");

    let app = TestApp::with_data_file(&path);
    let token = app.login().await;
    app.checkout(&token, "davinci-developer", "Alice", "Desk 7")
        .await;
    assert!(path.exists());

    let restarted = TestApp::with_data_file(&path);
    let token = restarted.login().await;
    let dongles = restarted
        .request("GET", "/api/dongles", None, Some(&token))
        .await;
    assert_eq!(dongles.body["davinci-developer"]["checkedOutBy"], "Alice");

    let history = restarted
        .request("GET", "/api/history", None, Some(&token))
        .await;
    assert_eq!(history.body.as_array().map(Vec::len), Some(1));

    let on_disk: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(on_disk["dongles"]["davinci-developer"]["location"], "Desk 7");
    assert_eq!(on_disk["history"][0]["action"], "checkout");
}

#[tokio::test]
async fn test_corrupt_file_degrades_reads_and_fails_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dongles.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let app = TestApp::with_data_file(&path);
    let token = app.login().await;

    let dongles = app.request("GET", "/api/dongles", None, Some(&token)).await;
    assert_eq!(dongles.status, StatusCode::OK);
    assert_eq!(dongles.body, serde_json::json!({}));

    let history = app.request("GET", "/api/history", None, Some(&token)).await;
    assert_eq!(history.body, serde_json::json!([]));

    let status = app.request("GET", "/api/status", None, Some(&token)).await;
    assert_eq!(status.body["totalDongles"], 0);

    let checkout = app
        .checkout(&token, "davinci-developer", "Alice", "Desk 1")
        .await;
    assert_eq!(checkout.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(checkout.body["code"], "STORAGE_ERROR");

    assert_eq!(std::fs::read(&path).unwrap(), b"{ not json");
}
