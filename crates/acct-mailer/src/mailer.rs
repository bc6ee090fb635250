use crate::Result;

use async_trait::async_trait;

/// Best-effort outbound message delivery.
///
/// Implementations carry their own timeout; a send call never blocks the
/// caller indefinitely. Callers treat every failure uniformly - the
/// variant distinction exists for logging, never for control flow.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()>;
}
