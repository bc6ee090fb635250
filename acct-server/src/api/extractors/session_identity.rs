//! Axum extractor for session-authenticated requests

use crate::{ApiError, state::AppState};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Extracts the authenticated identity from a `Authorization: Bearer`
/// session token. Rejects with 401 when the header is missing, the scheme
/// is wrong, or the token fails validation.
pub struct SessionIdentity {
    pub id: Uuid,
    pub email: String,
}

impl FromRequestParts<AppState> for SessionIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "missing authorization header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let value = header.to_str().map_err(|_| ApiError::Unauthorized {
                message: "invalid authorization header".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let token = value
                .strip_prefix("Bearer ")
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "expected Bearer token".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.session_validator.validate(token)?;

            let id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized {
                message: "invalid session".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            Ok(SessionIdentity {
                id,
                email: claims.email,
            })
        }
    }
}
