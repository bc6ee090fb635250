use crate::state::AppState;

use acct_db::IdentityRepository;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - store-backed health check
pub async fn health(State(state): State<AppState>) -> Response {
    let repo = IdentityRepository::new(state.pool.clone());

    match repo.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "version": env!("CARGO_PKG_VERSION"),
            })),
        )
            .into_response(),
        Err(e) => {
            log::error!("Health check failed, store unreachable: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "degraded" })),
            )
                .into_response()
        }
    }
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}
