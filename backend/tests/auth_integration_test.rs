//! Integration tests for registration, login, and profile updates

mod common;

use axum::http::StatusCode;
use common::unique_email;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_returns_name_and_token() {
    let app = common::TestApp::new().await;
    let email = unique_email("register");

    let body = format!(
        r#"{{"name":"Ada Lovelace","email":"{email}","password":"integration-test-pw"}}"#
    );
    let (status, json) = app.request("POST", "/register", Some(&body), None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["user"]["name"], "Ada Lovelace");

    // The token decodes to the registered identity
    let token = json["user"]["token"].as_str().unwrap();
    let jwt = jobtrack_backend::auth::JwtService::new(
        &jobtrack_backend::config::AppConfig::default().jwt.secret,
        3600,
    );
    let claims = jwt.verify(token).unwrap();
    assert_eq!(claims.name, "Ada Lovelace");
    assert!(uuid::Uuid::parse_str(&claims.sub).is_ok());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email_fails_second_time() {
    let app = common::TestApp::new().await;
    let email = unique_email("duplicate");

    let body = format!(
        r#"{{"name":"Ada Lovelace","email":"{email}","password":"integration-test-pw"}}"#
    );
    let (first, _) = app.request("POST", "/register", Some(&body), None).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, json) = app.request("POST", "/register", Some(&body), None).await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert!(json["msg"].as_str().unwrap().contains("already in use"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password_and_unknown_email_are_indistinguishable() {
    let app = common::TestApp::new().await;
    let email = unique_email("login");
    app.register_user("Ada Lovelace", &email).await;

    let wrong_password = format!(r#"{{"email":"{email}","password":"wrong-password-123"}}"#);
    let (status_a, json_a) = app.request("POST", "/login", Some(&wrong_password), None).await;

    let unknown = format!(
        r#"{{"email":"{}","password":"integration-test-pw"}}"#,
        unique_email("ghost")
    );
    let (status_b, json_b) = app.request("POST", "/login", Some(&unknown), None).await;

    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_b, StatusCode::UNAUTHORIZED);
    assert_eq!(json_a["msg"], json_b["msg"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_success_after_register() {
    let app = common::TestApp::new().await;
    let email = unique_email("roundtrip");
    app.register_user("Ada Lovelace", &email).await;

    let body = format!(r#"{{"email":"{email}","password":"integration-test-pw"}}"#);
    let (status, json) = app.request("POST", "/login", Some(&body), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["name"], "Ada Lovelace");
    assert!(json["user"]["token"].as_str().is_some());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_user_refreshes_token_and_name() {
    let app = common::TestApp::new().await;
    let email = unique_email("update");
    let token = app.register_user("Ada Lovelace", &email).await;

    let body = r#"{"name":"Ada King"}"#;
    let (status, json) = app
        .request("POST", "/updateUser", Some(body), Some(&token))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["name"], "Ada King");
    assert!(json["token"].as_str().is_some());
}
