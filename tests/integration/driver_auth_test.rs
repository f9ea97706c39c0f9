//! Integration tests for the driver authentication flow and kind isolation.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_register_and_profile() {
    let app = helpers::TestApp::new().await;

    let token = app.register_driver("d@x.com", "password1").await;

    let response = app
        .request("GET", "/api/drivers/profile", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"].as_str().unwrap(), "d@x.com");
    assert_eq!(
        response.body["data"]["vehicle"]["vehicle_type"]
            .as_str()
            .unwrap(),
        "car"
    );
    assert_eq!(response.body["data"]["status"].as_str().unwrap(), "active");
    assert!(response.body["data"]["password_hash"].is_null());
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = helpers::TestApp::new().await;
    let token = app.register_driver("out@x.com", "password1").await;

    let response = app
        .request("POST", "/api/drivers/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/drivers/profile", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rider_token_never_authorizes_driver_guard() {
    let app = helpers::TestApp::new().await;

    let rider_token = app.register_rider("cross@x.com", "password1").await;

    let response = app
        .request("GET", "/api/drivers/profile", None, Some(&rider_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_driver_token_never_authorizes_rider_guard() {
    let app = helpers::TestApp::new().await;

    let driver_token = app.register_driver("cross2@x.com", "password1").await;

    let response = app
        .request("GET", "/api/riders/profile", None, Some(&driver_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_same_email_allowed_across_kinds() {
    let app = helpers::TestApp::new().await;

    app.register_rider("both@x.com", "password1").await;
    // The same email registers fine as a driver: uniqueness is per kind.
    app.register_driver("both@x.com", "password1").await;
}

#[tokio::test]
async fn test_duplicate_driver_email_rejected() {
    let app = helpers::TestApp::new().await;
    app.register_driver("dupd@x.com", "password1").await;

    let response = app
        .request(
            "POST",
            "/api/drivers/register",
            Some(helpers::driver_payload("dupd@x.com", "password2")),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = helpers::TestApp::new().await;

    let mut zero_capacity = helpers::driver_payload("v@x.com", "password1");
    zero_capacity["vehicle"]["capacity"] = serde_json::json!(0);
    let response = app
        .request("POST", "/api/drivers/register", Some(zero_capacity), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let mut bad_lat = helpers::driver_payload("v@x.com", "password1");
    bad_lat["location"]["lat"] = serde_json::json!(120.0);
    let response = app
        .request("POST", "/api/drivers/register", Some(bad_lat), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let mut bad_type = helpers::driver_payload("v@x.com", "password1");
    bad_type["vehicle"]["vehicle_type"] = serde_json::json!("boat");
    let response = app
        .request("POST", "/api/drivers/register", Some(bad_type), None)
        .await;
    // Unknown enum values fail at deserialization
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}
