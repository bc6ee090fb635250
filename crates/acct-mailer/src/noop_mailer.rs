use crate::{Mailer, MailerError, Result};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Mailer used when outbound notification is globally disabled.
///
/// Every send reports `MailerError::Disabled`, which workflows treat as
/// "skipped" and answer with the fallback response, so a caller is never
/// left without their credential.
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, to: &str, _subject: &str, _html_body: &str) -> Result<()> {
        log::debug!("Notification disabled; skipping send to {}", to);
        Err(MailerError::Disabled {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
