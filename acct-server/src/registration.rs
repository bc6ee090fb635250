//! Registration workflow - validate, check uniqueness, issue a
//! credential, persist, notify, respond.
//!
//! The pre-insert lookup is a fast path that produces a friendly conflict
//! message; the UNIQUE index on the email column is the authoritative
//! guard under concurrent registration for the same address. Notification
//! is best-effort: a failure never rolls back the persisted identity and
//! degrades to a response that carries the plaintext secret instead.

use crate::{ApiError, ApiResult, state::AppState};

use acct_core::{
    DEFAULT_SECRET_ALPHABET, DEFAULT_SECRET_LENGTH, EmailAddress, Identity, generate_secret,
};
use acct_db::IdentityRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

const CREDENTIALS_SUBJECT: &str = "Your access credentials";

/// Result of a successful registration or credential reissue.
///
/// `secret` is populated only when notification did not go out, so the
/// caller is not locked out of an account whose credential exists nowhere
/// else. Once this value is dropped, the plaintext is gone; only the
/// Argon2id digest is stored.
pub struct RegistrationOutcome {
    pub identity: Identity,
    pub notified: bool,
    pub secret: Option<String>,
}

/// Admit one new identity for `raw_email`, issuing it a fresh credential.
pub async fn register_identity(state: &AppState, raw_email: &str) -> ApiResult<RegistrationOutcome> {
    // 1-2. Normalize and validate the untrusted input
    let email = EmailAddress::parse(raw_email)?;

    let repo = IdentityRepository::new(state.pool.clone());

    // 3. Fast-path duplicate check; the UNIQUE index remains authoritative
    if repo.find_by_email(email.as_str()).await?.is_some() {
        return Err(ApiError::Conflict {
            message: "already registered".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 4. Issue a credential; only the digest is persisted
    let secret = generate_secret(DEFAULT_SECRET_LENGTH, DEFAULT_SECRET_ALPHABET)?;
    let secret_hash = acct_auth::hash_secret(&secret)?;

    // 5. Persist. Losing the insert race surfaces as the same conflict as
    // the fast path (via From<DbError>).
    let identity = Identity::new(email, secret_hash);
    repo.insert(&identity).await?;

    log::info!("Registered identity {} ({})", identity.id, identity.email);

    // 6. Notify, best-effort
    let notified = notify_credentials(state, &identity.email, &secret).await;

    // 7. Respond; hold on to the plaintext only when it was not delivered
    Ok(RegistrationOutcome {
        identity,
        notified,
        secret: if notified { None } else { Some(secret) },
    })
}

/// Replace the credential of an existing identity with a freshly issued
/// one. Used by the authenticated change-password operation.
pub async fn reissue_secret(state: &AppState, identity_id: Uuid) -> ApiResult<RegistrationOutcome> {
    let repo = IdentityRepository::new(state.pool.clone());

    let identity = repo
        .find_by_id(identity_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Identity {} not found", identity_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let secret = generate_secret(DEFAULT_SECRET_LENGTH, DEFAULT_SECRET_ALPHABET)?;
    let secret_hash = acct_auth::hash_secret(&secret)?;

    let updated = repo.update_secret(identity.id, &secret_hash).await?;
    if !updated {
        return Err(ApiError::NotFound {
            message: format!("Identity {} not found", identity_id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Reissued credential for identity {}", identity.id);

    let notified = notify_credentials(state, &identity.email, &secret).await;

    Ok(RegistrationOutcome {
        identity,
        notified,
        secret: if notified { None } else { Some(secret) },
    })
}

/// Attempt out-of-band delivery of a freshly issued secret. Returns
/// whether delivery succeeded; every failure mode is treated the same way
/// and only distinguished in the logs.
async fn notify_credentials(state: &AppState, email: &str, secret: &str) -> bool {
    let body = render_credentials_email(secret);

    match state.mailer.send(email, CREDENTIALS_SUBJECT, &body).await {
        Ok(()) => {
            log::info!("Credentials delivered to {}", email);
            true
        }
        Err(e) if e.is_disabled() => {
            log::info!("Notification disabled; returning secret to {} in response", email);
            false
        }
        Err(e) => {
            log::warn!("Notification to {} failed: {}", email, e);
            false
        }
    }
}

fn render_credentials_email(secret: &str) -> String {
    format!(
        "<html><body>\
         <h2>Your account is ready</h2>\
         <p>Use the password below to sign in:</p>\
         <p><strong>Password:</strong> <code>{}</code></p>\
         <p>You can request a new password at any time after signing in.</p>\
         </body></html>",
        secret
    )
}
