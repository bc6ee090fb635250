//! Credential hashing. Secrets are stored as Argon2id PHC strings; the
//! plaintext never outlives the request that generated it.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;

/// Hash a plaintext secret with Argon2id and a fresh random salt.
#[track_caller]
pub fn hash_secret(secret: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash {
            message: format!("Hashing failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(hash.to_string())
}

/// Verify a candidate secret against a stored PHC string.
///
/// A mismatching secret is Ok(false); only a corrupt or unparseable
/// stored hash is an error.
#[track_caller]
pub fn verify_secret(candidate: &str, stored_hash: &str) -> AuthErrorResult<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::Hash {
        message: format!("Stored hash is not a valid PHC string: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hash {
            message: format!("Verification failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
