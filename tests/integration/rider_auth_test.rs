//! Integration tests for the rider authentication flow.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_register_login_profile_logout_roundtrip() {
    let app = helpers::TestApp::new().await;

    // Register
    let token = app.register_rider("a@x.com", "password1").await;

    // Profile with the fresh token
    let response = app
        .request("GET", "/api/riders/profile", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["email"].as_str().unwrap(),
        "a@x.com"
    );
    assert!(response.body["data"]["password_hash"].is_null());

    // Logout revokes the token
    let response = app
        .request("POST", "/api/riders/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The revoked token no longer authorizes, even though it is unexpired
    let response = app
        .request("GET", "/api/riders/profile", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.register_rider("login@x.com", "password1").await;

    let response = app
        .request(
            "POST",
            "/api/riders/login",
            Some(serde_json::json!({
                "email": "login@x.com",
                "password": "password1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new().await;
    app.register_rider("known@x.com", "password1").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/riders/login",
            Some(serde_json::json!({
                "email": "known@x.com",
                "password": "password2",
            })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/api/riders/login",
            Some(serde_json::json!({
                "email": "nobody@x.com",
                "password": "password1",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let app = helpers::TestApp::new().await;
    app.register_rider("dup@x.com", "password1").await;

    let response = app
        .request(
            "POST",
            "/api/riders/register",
            Some(serde_json::json!({
                "first_name": "Other",
                "email": "dup@x.com",
                "password": "password2",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_email_is_case_normalized() {
    let app = helpers::TestApp::new().await;
    app.register_rider("case@x.com", "password1").await;

    let response = app
        .request(
            "POST",
            "/api/riders/login",
            Some(serde_json::json!({
                "email": "CASE@X.COM",
                "password": "password1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_profile_without_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/riders/profile", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_garbage_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/riders/profile", None, Some("not.a.token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_token_is_success() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/api/riders/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_double_logout_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let token = app.register_rider("twice@x.com", "password1").await;

    let first = app
        .request("POST", "/api/riders/logout", None, Some(&token))
        .await;
    let second = app
        .request("POST", "/api/riders/logout", None, Some(&token))
        .await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = helpers::TestApp::new().await;

    let bad_email = app
        .request(
            "POST",
            "/api/riders/register",
            Some(serde_json::json!({
                "first_name": "Test",
                "email": "not-an-email",
                "password": "password1",
            })),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let short_password = app
        .request(
            "POST",
            "/api/riders/register",
            Some(serde_json::json!({
                "first_name": "Test",
                "email": "ok@x.com",
                "password": "short",
            })),
            None,
        )
        .await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);
}
