use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Issues HS256 session tokens after a successful login.
pub struct SessionSigner {
    encoding_key: EncodingKey,
    lifetime_secs: u64,
}

impl SessionSigner {
    pub fn new(secret: &[u8], lifetime_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            lifetime_secs,
        }
    }

    /// Issue a session token for an authenticated identity.
    #[track_caller]
    pub fn issue(&self, identity_id: Uuid, email: &str) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: identity_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.lifetime_secs as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
