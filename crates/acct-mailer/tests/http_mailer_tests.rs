use acct_mailer::{HttpMailer, HttpMailerConfig, Mailer, MailerError, NoopMailer};

use std::time::Duration;

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server_uri: &str, timeout: Duration) -> HttpMailerConfig {
    HttpMailerConfig {
        api_url: format!("{}/v1/send", server_uri),
        api_key: "test-api-key".to_string(),
        sender: "noreply@example.com".to_string(),
        timeout,
    }
}

#[tokio::test]
async fn given_accepting_provider_when_send_then_ok() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/send"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_partial_json(serde_json::json!({
            "from": "noreply@example.com",
            "to": "user@example.com",
            "subject": "Your account",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mailer = HttpMailer::new(config(&server.uri(), Duration::from_secs(5))).unwrap();

    // When
    let result = mailer
        .send("user@example.com", "Your account", "<p>secret</p>")
        .await;

    // Then
    assert!(result.is_ok());
}

#[tokio::test]
async fn given_rejecting_provider_when_send_then_provider_error_with_status() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/send"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid recipient"))
        .mount(&server)
        .await;

    let mailer = HttpMailer::new(config(&server.uri(), Duration::from_secs(5))).unwrap();

    // When
    let err = mailer
        .send("user@example.com", "Your account", "<p>secret</p>")
        .await
        .unwrap_err();

    // Then
    match err {
        MailerError::Provider { status, message, .. } => {
            assert_eq!(status, 422);
            assert_eq!(message, "invalid recipient");
        }
        other => panic!("expected Provider error, got {}", other),
    }
}

#[tokio::test]
async fn given_stalled_provider_when_send_then_times_out_as_transport_error() {
    // Given: provider answers well after the client timeout
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/send"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let mailer = HttpMailer::new(config(&server.uri(), Duration::from_millis(200))).unwrap();

    // When
    let err = mailer
        .send("user@example.com", "Your account", "<p>secret</p>")
        .await
        .unwrap_err();

    // Then
    assert!(matches!(err, MailerError::Transport { .. }));
}

#[tokio::test]
async fn given_noop_mailer_when_send_then_reports_disabled() {
    let mailer = NoopMailer;

    let err = mailer
        .send("user@example.com", "Your account", "<p>secret</p>")
        .await
        .unwrap_err();

    assert!(err.is_disabled());
}
