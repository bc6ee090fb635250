use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAILER_ENABLED, DEFAULT_MAILER_TIMEOUT_SECS,
    MAX_MAILER_TIMEOUT_SECS, MIN_MAILER_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailerConfig {
    /// Global switch for outbound notification. When false, registration
    /// still succeeds and the secret is returned in the response instead.
    pub enabled: bool,
    /// Transactional-email HTTP API endpoint
    pub api_url: Option<String>,
    /// Bearer API key for the endpoint
    pub api_key: Option<String>,
    /// Sender address ("from")
    pub sender: Option<String>,
    /// Hard timeout for one send attempt, in seconds
    pub timeout_secs: u64,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_MAILER_ENABLED,
            api_url: None,
            api_key: None,
            sender: None,
            timeout_secs: DEFAULT_MAILER_TIMEOUT_SECS,
        }
    }
}

impl MailerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs < MIN_MAILER_TIMEOUT_SECS || self.timeout_secs > MAX_MAILER_TIMEOUT_SECS
        {
            return Err(ConfigError::mailer(format!(
                "mailer.timeout_secs must be {}-{}, got {}",
                MIN_MAILER_TIMEOUT_SECS, MAX_MAILER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !self.enabled {
            return Ok(());
        }

        for (field, value) in [
            ("mailer.api_url", &self.api_url),
            ("mailer.api_key", &self.api_key),
            ("mailer.sender", &self.sender),
        ] {
            match value {
                Some(v) if !v.trim().is_empty() => {}
                _ => {
                    return Err(ConfigError::mailer(format!(
                        "{} is required when mailer.enabled = true",
                        field
                    )));
                }
            }
        }

        Ok(())
    }
}
