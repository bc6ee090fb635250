//! Identity repository - the only write path to identity records.
//!
//! Emails are stored in normalized (trimmed, lowercase) form, so the
//! UNIQUE index on the email column enforces case-insensitive uniqueness
//! at the storage level. The pre-insert existence check in the
//! registration workflow is a fast path only; a concurrent insert that
//! loses the race surfaces here as `DbError::UniqueViolation`.

use crate::{DbError, Result as DbErrorResult};

use acct_core::Identity;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Atomic create. A duplicate normalized email surfaces as
    /// `DbError::UniqueViolation`.
    pub async fn insert(&self, identity: &Identity) -> DbErrorResult<()> {
        let id = identity.id.to_string();
        let created_at = identity.created_at.timestamp();
        let last_authenticated_at = identity.last_authenticated_at.map(|dt| dt.timestamp());

        sqlx::query(
            r#"
                INSERT INTO identities (
                    id, email, secret_hash, created_at, last_authenticated_at
                ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&identity.email)
        .bind(&identity.secret_hash)
        .bind(created_at)
        .bind(last_authenticated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Case-insensitive lookup. `email` must already be normalized
    /// (trimmed, lowercase); the stored column only ever holds
    /// normalized values.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, secret_hash, created_at, last_authenticated_at
                FROM identities
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::decode_row).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, email, secret_hash, created_at, last_authenticated_at
                FROM identities
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::decode_row).transpose()
    }

    /// Replace the stored credential digest. Returns false when no record
    /// with the given id exists.
    pub async fn update_secret(&self, id: Uuid, new_hash: &str) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query(
            r#"
                UPDATE identities
                SET secret_hash = ?
                WHERE id = ?
            "#,
        )
        .bind(new_hash)
        .bind(id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Record a successful authentication. Best-effort: callers log a
    /// failure and must never let it affect an authentication result that
    /// already succeeded.
    pub async fn touch_last_authenticated(&self, id: Uuid, at: DateTime<Utc>) -> DbErrorResult<()> {
        let id_str = id.to_string();
        let timestamp = at.timestamp();

        sqlx::query(
            r#"
                UPDATE identities
                SET last_authenticated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(timestamp)
        .bind(id_str)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Cheap store reachability probe for health checks.
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn decode_row(row: SqliteRow) -> DbErrorResult<Identity> {
        let id_str: String = row.try_get("id")?;
        let created_at_ts: i64 = row.try_get("created_at")?;
        let last_authenticated_ts: Option<i64> = row.try_get("last_authenticated_at")?;

        Ok(Identity {
            id: Uuid::parse_str(&id_str).map_err(|e| DbError::Decode {
                message: format!("Invalid UUID in identity.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            email: row.try_get("email")?,
            secret_hash: row.try_get("secret_hash")?,
            created_at: DateTime::from_timestamp(created_at_ts, 0).ok_or_else(|| {
                DbError::Decode {
                    message: "Invalid timestamp in identity.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            last_authenticated_at: last_authenticated_ts
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}
