use crate::registration::RegistrationOutcome;

use serde::Serialize;

/// Response body for a successful registration.
///
/// `secret` is present only when notification failed or is disabled, so
/// the caller is never locked out of the account that was just created.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl From<RegistrationOutcome> for RegisterResponse {
    fn from(outcome: RegistrationOutcome) -> Self {
        let message = if outcome.notified {
            "registered; your password has been sent by email".to_string()
        } else {
            "registered; save the password from this response now".to_string()
        };

        Self {
            success: true,
            message,
            secret: outcome.secret,
        }
    }
}
