use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_LIFETIME_SECS, MAX_SESSION_LIFETIME_SECS,
    MIN_SESSION_LIFETIME_SECS, MIN_SESSION_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// HS256 signing secret for session tokens. Required at startup.
    pub secret: Option<String>,
    /// Session token lifetime in seconds
    pub lifetime_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            lifetime_secs: DEFAULT_SESSION_LIFETIME_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.secret {
            None => {
                return Err(ConfigError::session(
                    "session.secret is required (set ACCT_SESSION_SECRET or session.secret)",
                ));
            }
            Some(ref secret) if secret.len() < MIN_SESSION_SECRET_LENGTH => {
                return Err(ConfigError::session(format!(
                    "session.secret must be at least {} characters",
                    MIN_SESSION_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if self.lifetime_secs < MIN_SESSION_LIFETIME_SECS
            || self.lifetime_secs > MAX_SESSION_LIFETIME_SECS
        {
            return Err(ConfigError::session(format!(
                "session.lifetime_secs must be {}-{}, got {}",
                MIN_SESSION_LIFETIME_SECS, MAX_SESSION_LIFETIME_SECS, self.lifetime_secs
            )));
        }

        Ok(())
    }
}
