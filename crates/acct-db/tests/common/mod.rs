#![allow(dead_code)]

//! Test infrastructure for acct-db repository tests

use acct_core::{EmailAddress, Identity};

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Create a test pool with in-memory SQLite.
///
/// Capped at one connection: every pooled connection to ":memory:" opens
/// its own database, so a larger pool would see an empty schema.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create a file-backed pool for tests that need real connection
/// concurrency. Returns the TempDir so it outlives the pool.
pub async fn create_file_pool(max_connections: u32) -> (SqlitePool, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(&db_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    (pool, dir)
}

/// Build an identity from a raw email, hashing nothing - repository tests
/// only care that the stored string round-trips.
pub fn test_identity(raw_email: &str) -> Identity {
    let email = EmailAddress::parse(raw_email).expect("test email must be valid");
    Identity::new(email, format!("$argon2id$test-hash-{}", raw_email.len()))
}
