use serde::Serialize;

/// Response body for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    /// Bearer session token for subsequent authenticated requests
    pub token: String,
}
