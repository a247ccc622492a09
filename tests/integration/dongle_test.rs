//! Integration tests for listing and transitioning dongles.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_seeded_pool() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app.request("GET", "/api/dongles", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let dongles = response.body.as_object().expect("object of dongles");
    assert_eq!(dongles.len(), 3);
    assert_eq!(
        response.body["davinci-configurator-1"]["name"],
        "DaVinci Configurator #1"
    );
    assert_eq!(
        response.body["davinci-configurator-2"]["name"],
        "DaVinci Configurator #2"
    );
    assert_eq!(response.body["davinci-developer"]["name"], "DaVinci Developer");
    assert!(
        dongles
            .values()
            .all(|d| d["isCheckedOut"] == false && d["checkedOutBy"].is_null())
    );
}

#[tokio::test]
async fn test_checkout_conflict_then_checkin() {
    let app = TestApp::new();
    let token = app.login().await;

    let alice = app
        .checkout(&token, "davinci-developer", "Alice", "Desk 12")
        .await;
    assert_eq!(alice.status, StatusCode::OK);
    assert_eq!(
        alice.body["message"],
        "DaVinci Developer checked out successfully"
    );
    assert_eq!(alice.body["dongle"]["isCheckedOut"], true);
    assert_eq!(alice.body["dongle"]["checkedOutBy"], "Alice");
    assert_eq!(alice.body["dongle"]["location"], "Desk 12");
    assert!(alice.body["dongle"]["checkedOutAt"].is_string());
    assert_eq!(alice.body["historyEntry"]["action"], "checkout");

    let bob = app
        .checkout(&token, "davinci-developer", "Bob", "Desk 3")
        .await;
    assert_eq!(bob.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        bob.body["error"],
        "Dongle is already checked out by Alice"
    );

    let checkin = app
        .request(
            "POST",
            "/api/dongles/davinci-developer/checkin",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(checkin.status, StatusCode::OK);
    assert_eq!(
        checkin.body["message"],
        "DaVinci Developer checked in successfully"
    );
    assert_eq!(checkin.body["dongle"]["isCheckedOut"], false);
    assert!(checkin.body["dongle"]["checkedOutBy"].is_null());
    assert_eq!(checkin.body["historyEntry"]["action"], "checkin");
    assert_eq!(checkin.body["historyEntry"]["userName"], "Alice");
    assert_eq!(checkin.body["historyEntry"]["location"], "Desk 12");

    let bob = app
        .checkout(&token, "davinci-developer", "Bob", "Desk 3")
        .await;
    assert_eq!(bob.status, StatusCode::OK);
    assert_eq!(bob.body["dongle"]["checkedOutBy"], "Bob");
}

#[tokio::test]
async fn test_checkout_requires_user_and_location() {
    let app = TestApp::new();
    let token = app.login().await;

    for (user, location) in [("", "Desk 1"), ("Alice", ""), ("   ", "Desk 1")] {
        let response = app
            .checkout(&token, "davinci-developer", user, location)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body["error"],
            "User name and desk location are required"
        );
    }

    let missing = app
        .request(
            "POST",
            "/api/dongles/davinci-developer/checkout",
            Some(serde_json::json!({ "userName": "Alice" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let list = app.request("GET", "/api/dongles", None, Some(&token)).await;
    assert_eq!(list.body["davinci-developer"]["isCheckedOut"], false);
}

#[tokio::test]
async fn test_unknown_dongle() {
    let app = TestApp::new();
    let token = app.login().await;

    let checkout = app.checkout(&token, "nope", "Alice", "Desk 1").await;
    assert_eq!(checkout.status, StatusCode::NOT_FOUND);
    assert_eq!(checkout.body["error"], "Dongle not found");

    let checkin = app
        .request("POST", "/api/dongles/nope/checkin", None, Some(&token))
        .await;
    assert_eq!(checkin.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checkin_when_available() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/dongles/davinci-configurator-1/checkin",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "Dongle is not currently checked out"
    );
}

#[tokio::test]
async fn test_checkout_accepts_long_and_padded_input() {
    let app = TestApp::new();
    let token = app.login().await;

    let long_name = "A".repeat(101);
    let long = app
        .checkout(&token, "davinci-configurator-1", &long_name, &"D".repeat(150))
        .await;
    assert_eq!(long.status, StatusCode::OK);
    assert_eq!(long.body["dongle"]["checkedOutBy"], long_name.as_str());

    let padded = format!("Alice{}", " ".repeat(100));
    let trimmed = app
        .checkout(&token, "davinci-configurator-2", &padded, "  Desk 4  ")
        .await;
    assert_eq!(trimmed.status, StatusCode::OK);
    assert_eq!(trimmed.body["dongle"]["checkedOutBy"], "Alice");
    assert_eq!(trimmed.body["dongle"]["location"], "Desk 4");
}
