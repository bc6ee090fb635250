mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod mailer_config;
mod server_config;
mod session_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use mailer_config::MailerConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "accounts.db";
const DEFAULT_SESSION_LIFETIME_SECS: u64 = 1800;
const MIN_SESSION_LIFETIME_SECS: u64 = 60;
const MAX_SESSION_LIFETIME_SECS: u64 = 86_400;
const MIN_SESSION_SECRET_LENGTH: usize = 16;
const DEFAULT_MAILER_ENABLED: bool = false;
const DEFAULT_MAILER_TIMEOUT_SECS: u64 = 15;
const MIN_MAILER_TIMEOUT_SECS: u64 = 1;
const MAX_MAILER_TIMEOUT_SECS: u64 = 60;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
