//! Login REST API handler

use crate::{ApiError, ApiResult, LoginRequest, LoginResponse, state::AppState};

use acct_db::IdentityRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use chrono::Utc;
use error_location::ErrorLocation;

/// POST /login
///
/// Verify email + secret and establish a session. Unknown email and wrong
/// secret are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let raw_email = req.email.unwrap_or_default();
    let secret = req.secret.unwrap_or_default();

    if raw_email.trim().is_empty() || secret.is_empty() {
        return Err(ApiError::Validation {
            message: "email and secret are required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Lookup is by normalized form; shape validation is registration's
    // concern - an address that never registered simply fails to match.
    let normalized = raw_email.trim().to_ascii_lowercase();

    let repo = IdentityRepository::new(state.pool.clone());
    let identity = repo
        .find_by_email(&normalized)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !acct_auth::verify_secret(&secret, &identity.secret_hash)? {
        return Err(invalid_credentials());
    }

    // Best-effort: a failed timestamp update never affects a login that
    // already succeeded.
    if let Err(e) = repo.touch_last_authenticated(identity.id, Utc::now()).await {
        log::warn!(
            "Failed to update last_authenticated_at for {}: {}",
            identity.id,
            e
        );
    }

    let token = state.session_signer.issue(identity.id, &identity.email)?;

    log::info!("Login succeeded for identity {}", identity.id);

    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized {
        message: "invalid credentials".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
