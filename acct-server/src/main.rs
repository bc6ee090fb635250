use acct_server::{build_router, logger, state::AppState};

use acct_auth::{SessionSigner, SessionValidator};
use acct_mailer::{HttpMailer, HttpMailerConfig, Mailer, NoopMailer};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = acct_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = acct_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting acct-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/acct-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Build the mailer: HTTP provider when enabled, no-op otherwise
    let mailer: Arc<dyn Mailer> = if config.mailer.enabled {
        let (Some(api_url), Some(api_key), Some(sender)) = (
            config.mailer.api_url.clone(),
            config.mailer.api_key.clone(),
            config.mailer.sender.clone(),
        ) else {
            unreachable!("validate() ensures mailer credentials when mailer.enabled")
        };

        info!("Mailer: HTTP provider enabled ({})", api_url);
        Arc::new(HttpMailer::new(HttpMailerConfig {
            api_url,
            api_key,
            sender,
            timeout: Duration::from_secs(config.mailer.timeout_secs),
        })?)
    } else {
        warn!("Mailer DISABLED - secrets are returned in registration responses");
        Arc::new(NoopMailer)
    };

    // Session gate
    let Some(ref session_secret) = config.session.secret else {
        unreachable!("validate() ensures session.secret is set")
    };
    let session_signer = Arc::new(SessionSigner::new(
        session_secret.as_bytes(),
        config.session.lifetime_secs,
    ));
    let session_validator = Arc::new(SessionValidator::with_hs256(session_secret.as_bytes()));

    // Build application state
    let app_state = AppState {
        pool,
        mailer,
        session_signer,
        session_validator,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        }
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
        }
    }
}
