use serde::Deserialize;

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
}
