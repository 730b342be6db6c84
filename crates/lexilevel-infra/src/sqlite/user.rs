//! SQLite user profile repository implementation.

use lexilevel_core::repository::user::UserRepository;
use lexilevel_types::error::RepositoryError;
use lexilevel_types::user::{User, UserId};
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, storage_error};

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn upsert(&self, user: &User) -> Result<(), RepositoryError> {
        // ON CONFLICT keeps the row (and its sessions) in place; REPLACE
        // would delete it and cascade.
        sqlx::query(
            "INSERT INTO users (id, email, created_at) VALUES (?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET email = excluded.email, created_at = excluded.created_at",
        )
        .bind(user.id.as_str())
        .bind(&user.email)
        .bind(format_datetime(&user.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT id, email, created_at FROM users WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(storage_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: String = row
            .try_get("id")
            .map_err(storage_error)?;
        let email: String = row
            .try_get("email")
            .map_err(storage_error)?;
        let created_at: String = row
            .try_get("created_at")
            .map_err(storage_error)?;

        Ok(Some(User {
            id: UserId::new(id),
            email,
            created_at: parse_datetime(&created_at)?,
        }))
    }
}
