//! Integration tests for login, bearer tokens and startup wiring.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use recruit_api::{build_router, build_state};
use recruit_auth::JwtEncoder;
use recruit_core::config::{AppConfig, auth::AuthConfig};

use helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "Lead@Example.com", "password": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["access_token"].is_string());
    assert_eq!(response.body["token_type"], "Bearer");
    assert!(response.body["expires_at"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_match() {
    let app = TestApp::new().await;

    let wrong = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": ADMIN_EMAIL, "password": "wrong-password" })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "ghost@example.com", "password": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body, unknown.body);
    assert_eq!(wrong.body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_rejects_malformed_email() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "lead", "password": ADMIN_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new().await;
    let forged = JwtEncoder::new(&AuthConfig {
        jwt_secret: "someone-else".into(),
        ..AuthConfig::default()
    })
    .expect("encoder")
    .issue(Uuid::new_v4(), ADMIN_EMAIL)
    .expect("issue");

    let response = app
        .request("GET", "/recruits", None, Some(&forged.access_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_basic_scheme_is_rejected() {
    let app = TestApp::new().await;
    let req = axum::http::Request::builder()
        .uri("/recruits")
        .header("Authorization", "Basic bGVhZDpwdw==")
        .body(axum::body::Body::empty())
        .expect("request");
    let response = app.router.clone().oneshot(req).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}

#[tokio::test]
async fn test_build_state_creates_bootstrap_admin() {
    let mut config = AppConfig::default();
    config.database.provider = "memory".into();
    config.auth.jwt_secret = "bootstrap-secret".into();
    config.auth.bootstrap_admin_email = Some("boot@example.com".into());
    config.auth.bootstrap_admin_password = Some("bootstrap-pass".into());

    let state = build_state(config).await.expect("state");
    let token = state
        .authenticator
        .login("boot@example.com", "bootstrap-pass")
        .await
        .expect("bootstrap admin can log in");
    assert!(!token.access_token.is_empty());

    let router = build_router(state);
    let req = axum::http::Request::builder()
        .uri("/recruits")
        .header("Authorization", format!("Bearer {}", token.access_token))
        .body(axum::body::Body::empty())
        .expect("request");
    let response = router.oneshot(req).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_build_state_rejects_oversized_token_ttl() {
    let mut config = AppConfig::default();
    config.database.provider = "memory".into();
    config.auth.token_ttl_minutes = u64::MAX;
    let err = build_state(config).await.err().expect("oversized ttl fails");
    assert_eq!(err.kind, recruit_core::ErrorKind::Configuration);
    assert!(err.message.contains("token_ttl_minutes"));
}

#[tokio::test]
async fn test_build_state_rejects_unknown_provider() {
    let mut config = AppConfig::default();
    config.database.provider = "sqlite".into();
    let err = build_state(config).await.err().expect("unknown provider fails");
    assert!(err.message.contains("Unknown database provider"));
}
