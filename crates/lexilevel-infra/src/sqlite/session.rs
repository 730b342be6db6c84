//! SQLite session repository implementation.

use lexilevel_core::repository::session::SessionRepository;
use lexilevel_types::error::RepositoryError;
use lexilevel_types::session::Session;
use lexilevel_types::user::UserId;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, storage_error};

/// SQLite-backed implementation of `SessionRepository`.
pub struct SqliteSessionRepository {
    pool: DatabasePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Delete every session whose expiry has passed. Returns the number removed.
    pub async fn purge_expired(&self) -> Result<u64, RepositoryError> {
        let now = format_datetime(&chrono::Utc::now());
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(&now)
            .execute(&self.pool.writer)
            .await
            .map_err(storage_error)?;
        Ok(result.rows_affected())
    }
}

impl SessionRepository for SqliteSessionRepository {
    async fn create(&self, session: &Session) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO sessions (token_hash, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&session.token_hash)
        .bind(session.user_id.as_str())
        .bind(format_datetime(&session.created_at))
        .bind(format_datetime(&session.expires_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                Err(RepositoryError::Conflict("session token already exists".to_string()))
            }
            Err(e) => Err(storage_error(e)),
        }
    }

    async fn get_by_hash(&self, token_hash: &str) -> Result<Option<Session>, RepositoryError> {
        let row = sqlx::query(
            "SELECT token_hash, user_id, created_at, expires_at FROM sessions WHERE token_hash = ?",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(storage_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let get = |col: &str| -> Result<String, RepositoryError> {
            row.try_get(col)
                .map_err(storage_error)
        };

        Ok(Some(Session {
            token_hash: get("token_hash")?,
            user_id: UserId::new(get("user_id")?),
            created_at: parse_datetime(&get("created_at")?)?,
            expires_at: parse_datetime(&get("expires_at")?)?,
        }))
    }

    async fn delete(&self, token_hash: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool.writer)
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}
