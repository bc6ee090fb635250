//! Identity entity - one registered user.

use crate::EmailAddress;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The stored representation of one registered user.
///
/// `email` is always normalized (trimmed, lowercase); uniqueness across
/// identities is case-insensitive by construction. `secret_hash` holds an
/// Argon2id PHC string, never the plaintext secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub secret_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_authenticated_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Create a new identity with a fresh id, timestamped now.
    pub fn new(email: EmailAddress, secret_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into_string(),
            secret_hash,
            created_at: Utc::now(),
            last_authenticated_at: None,
        }
    }
}
