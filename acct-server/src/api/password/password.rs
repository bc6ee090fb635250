//! Change-password REST API handler
//!
//! The credential model is system-issued: the server generates the new
//! secret, the caller never chooses one.

use crate::{ApiResult, ChangePasswordResponse, SessionIdentity, registration, state::AppState};

use axum::{Json, extract::State};

/// POST /password (authenticated)
///
/// Issue a fresh random secret for the session identity and attempt to
/// deliver it out-of-band.
pub async fn change_password(
    State(state): State<AppState>,
    session: SessionIdentity,
) -> ApiResult<Json<ChangePasswordResponse>> {
    let outcome = registration::reissue_secret(&state, session.id).await?;

    Ok(Json(outcome.into()))
}
