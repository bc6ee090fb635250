pub mod error;
pub mod http_mailer;
pub mod mailer;
pub mod noop_mailer;

pub use error::{MailerError, Result};
pub use http_mailer::{HttpMailer, HttpMailerConfig};
pub use mailer::Mailer;
pub use noop_mailer::NoopMailer;
