use crate::registration::RegistrationOutcome;

use serde::Serialize;

/// Response body for a successful credential reissue.
///
/// Mirrors the registration fallback: `secret` is present only when the
/// notification did not go out.
#[derive(Debug, Serialize)]
pub struct ChangePasswordResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl From<RegistrationOutcome> for ChangePasswordResponse {
    fn from(outcome: RegistrationOutcome) -> Self {
        let message = if outcome.notified {
            "password changed; your new password has been sent by email".to_string()
        } else {
            "password changed; save the password from this response now".to_string()
        };

        Self {
            success: true,
            message,
            secret: outcome.secret,
        }
    }
}
