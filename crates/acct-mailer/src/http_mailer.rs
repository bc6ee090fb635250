//! Transactional-email delivery over a provider HTTP API.

use crate::{Mailer, MailerError, Result};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use serde::Serialize;

/// How much provider response body to keep in an error message.
const ERROR_BODY_LIMIT: usize = 256;

#[derive(Debug, Clone)]
pub struct HttpMailerConfig {
    /// Provider send endpoint, e.g. "https://api.example.com/v1/send"
    pub api_url: String,
    /// Bearer API key
    pub api_key: String,
    /// Sender address
    pub sender: String,
    /// Hard timeout for one send attempt
    pub timeout: Duration,
}

pub struct HttpMailer {
    config: HttpMailerConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

impl HttpMailer {
    /// Build a mailer with the timeout baked into the HTTP client, so a
    /// stalled outbound connection cannot block a calling workflow past
    /// the configured bound.
    #[track_caller]
    pub fn new(config: HttpMailerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailerError::Build {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()> {
        let body = SendRequest {
            from: &self.config.sender,
            to,
            subject,
            html: html_body,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message: String = body.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(MailerError::Provider {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::debug!("Mail accepted by provider for {}", to);
        Ok(())
    }
}
