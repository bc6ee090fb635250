//! Registration REST API handler

use crate::{ApiResult, RegisterRequest, RegisterResponse, registration, state::AppState};

use axum::{Json, extract::State, http::StatusCode};

/// POST /register
///
/// Admit a new identity and attempt to deliver its credential out-of-band.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let raw_email = req.email.unwrap_or_default();

    let outcome = registration::register_identity(&state, &raw_email).await?;

    Ok((StatusCode::CREATED, Json(outcome.into())))
}
