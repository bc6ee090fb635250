#![allow(dead_code)]

//! Test infrastructure for acct-server API tests

use acct_auth::{SessionSigner, SessionValidator};
use acct_mailer::{Mailer, MailerError, Result as MailerResult};
use acct_server::AppState;

use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

const TEST_SESSION_SECRET: &[u8] = b"test-session-secret-at-least-16";

/// Create a test pool with in-memory SQLite.
///
/// One connection only: each pooled connection to ":memory:" opens its
/// own database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/acct-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing with the given mailer
pub async fn create_test_app_state(mailer: Arc<dyn Mailer>) -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        mailer,
        session_signer: Arc::new(SessionSigner::new(TEST_SESSION_SECRET, 600)),
        session_validator: Arc::new(SessionValidator::with_hs256(TEST_SESSION_SECRET)),
    }
}

/// One message captured by RecordingMailer
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mailer that records every send and reports success
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<SentMail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> MailerResult<()> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html_body.to_string(),
        });
        Ok(())
    }
}

/// Mailer that always fails like a rejecting provider
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _to: &str, _subject: &str, _html_body: &str) -> MailerResult<()> {
        Err(MailerError::Provider {
            status: 500,
            message: "provider unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// POST a JSON body and return (status, parsed response body)
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// POST a JSON body with a bearer token
pub async fn post_json_authed(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// GET a path and return (status, parsed response body)
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
