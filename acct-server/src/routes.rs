use crate::{change_password, health, login, register, state::AppState};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Registration and authentication
        .route("/register", post(register))
        .route("/login", post(login))
        // Authenticated operations
        .route("/password", post(change_password))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
