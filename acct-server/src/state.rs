use acct_auth::{SessionSigner, SessionValidator};
use acct_mailer::Mailer;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for all handlers.
///
/// The pool is the only shared mutable resource; everything else is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub mailer: Arc<dyn Mailer>,
    pub session_signer: Arc<SessionSigner>,
    pub session_validator: Arc<SessionValidator>,
}
