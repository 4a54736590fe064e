//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tower::ServiceExt;

use recruit_api::{AppState, build_router};
use recruit_auth::Authenticator;
use recruit_core::config::AppConfig;
use recruit_core::result::AppResult;
use recruit_database::Stores;
use recruit_mail::{Mailer, OutgoingMail};
use recruit_service::{ConfirmationNotifier, RecruitService};

pub const ADMIN_EMAIL: &str = "lead@example.com";
pub const ADMIN_PASSWORD: &str = "s3cret-pass";

/// Mailer that hands every message to the test.
#[derive(Debug)]
pub struct ChannelMailer(mpsc::UnboundedSender<OutgoingMail>);

#[async_trait]
impl Mailer for ChannelMailer {
    async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
        let _ = self.0.send(mail);
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Mail the app tried to send
    pub outbox: mpsc::UnboundedReceiver<OutgoingMail>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// In-memory stores, a capturing mailer and one admin account.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let stores = Stores::in_memory();
        let (tx, outbox) = mpsc::unbounded_channel();
        let notifier = Arc::new(ConfirmationNotifier::new(Arc::new(ChannelMailer(tx))));
        let recruit_service = Arc::new(RecruitService::new(
            Arc::clone(&stores.recruits),
            notifier,
        ));
        let authenticator = Arc::new(
            Authenticator::new(Arc::clone(&stores.admins), &config.auth)
                .expect("Failed to build authenticator"),
        );
        authenticator
            .ensure_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("Failed to create admin");

        let state = AppState::new(Arc::new(config.clone()), recruit_service, authenticator);
        Self {
            router: build_router(state),
            outbox,
            config,
        }
    }

    /// Login and return the bearer token
    pub async fn login(&self) -> String {
        let response = self
            .request(
                "POST",
                "/auth/login",
                Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "Login failed: {:?}", response.body);
        response.body["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Submit an application and return the stored record
    pub async fn submit(&self, body: Value) -> Value {
        let response = self.request("POST", "/recruits", Some(body), None).await;
        assert_eq!(response.status, StatusCode::CREATED, "Submit failed: {:?}", response.body);
        response.body
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body, token).await
    }

    /// Make a request with an unparsed body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// A complete, valid application for `student_id`.
pub fn application(student_id: &str) -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "studentId": student_id,
        "personalEmail": "ada@example.com",
        "gsuiteEmail": "ada@g.example.edu",
        "phoneNumber": "01700000000",
        "enrollmentSemester": "Spring 2023",
        "residentialSemester": "Summer 2023",
        "currentSemester": "Fall 2025",
        "preferedDepartment": "rpm",
        "preferedDepartment2": "it",
        "hobbies": "",
        "about": "I like analytical engines.",
        "skills": "Mathematics",
        "facebookLink": "https://facebook.com/ada",
        "linkedinLink": "",
        "githubLink": "https://github.com/ada",
        "portfolioLink": ""
    })
}
