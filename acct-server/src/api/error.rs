//! REST API error types
//!
//! Every failure renders as a JSON body with a boolean success flag, a
//! machine-readable code, and a human-readable message.

use acct_auth::AuthError;
use acct_core::CoreError;
use acct_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input (400). Client-caused; never logged as a
    /// server fault.
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Email already registered (409). Expected and frequent.
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Missing, malformed, or expired session; bad credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). The message is logged but never sent
    /// to the client.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Server faults get logged with location; client-caused failures
        // are expected traffic and stay at debug level.
        if matches!(self, ApiError::Internal { .. }) {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let (status, code, message) = match self {
            ApiError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            ApiError::Conflict { message, .. } => {
                (StatusCode::CONFLICT, "ALREADY_REGISTERED", message)
            }
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
            }
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                // Never leak internal detail to the client
                "server error".to_string(),
            ),
        };

        (
            status,
            Json(ApiErrorResponse {
                success: false,
                code: code.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::EmptyEmail { .. } => ApiError::Validation {
                message: "email is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::MalformedEmail { .. } => ApiError::Validation {
                message: "invalid email".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            // Generator misconfiguration is a server fault, not client input
            other => {
                log::error!("Credential generation error: {}", other);
                ApiError::Internal {
                    message: other.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // A unique violation means we lost the insert race: same outcome
        // as the fast-path duplicate check, not a server fault.
        if e.is_unique_violation() {
            return ApiError::Conflict {
                message: "already registered".to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Hash { .. } | AuthError::JwtEncode { .. } => {
                log::error!("Auth error: {}", e);
                ApiError::Internal {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            _ => ApiError::Unauthorized {
                message: "invalid session".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
