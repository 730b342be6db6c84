//! SQLite history repository implementation.

use lexilevel_core::repository::history::HistoryRepository;
use lexilevel_types::error::RepositoryError;
use lexilevel_types::history::{HistoryId, HistoryRecord};
use lexilevel_types::level::ProficiencyLevel;
use lexilevel_types::user::UserId;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, storage_error};

/// SQLite-backed implementation of `HistoryRepository`.
pub struct SqliteHistoryRepository {
    pool: DatabasePool,
}

impl SqliteHistoryRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain HistoryRecord.
struct HistoryRow {
    id: String,
    text: String,
    hobbies: String,
    level: String,
    timestamp: String,
}

impl HistoryRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            text: row.try_get("text")?,
            hobbies: row.try_get("hobbies")?,
            level: row.try_get("level")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_record(self) -> Result<HistoryRecord, RepositoryError> {
        let id = self
            .id
            .parse::<HistoryId>()
            .map_err(|e| RepositoryError::Query(format!("invalid history id: {e}")))?;

        let level: ProficiencyLevel = self.level.parse().map_err(RepositoryError::Query)?;

        let hobbies: Vec<String> = serde_json::from_str(&self.hobbies)
            .map_err(|e| RepositoryError::Query(format!("invalid hobbies JSON: {e}")))?;

        Ok(HistoryRecord {
            id,
            text: self.text,
            hobbies,
            level,
            timestamp: parse_datetime(&self.timestamp)?,
        })
    }
}

impl HistoryRepository for SqliteHistoryRepository {
    async fn append(&self, user_id: &UserId, record: &HistoryRecord) -> Result<(), RepositoryError> {
        let hobbies_json = serde_json::to_string(&record.hobbies)
            .map_err(|e| RepositoryError::Query(format!("invalid hobbies: {e}")))?;

        sqlx::query(
            "INSERT INTO history_records (id, user_id, text, hobbies, level, timestamp)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(record.id.to_string())
        .bind(user_id.as_str())
        .bind(&record.text)
        .bind(&hobbies_json)
        .bind(record.level.as_str())
        .bind(format_datetime(&record.timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    async fn list_history(&self, user_id: &UserId) -> Result<Vec<HistoryRecord>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM history_records WHERE user_id = ? ORDER BY timestamp DESC, id DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(storage_error)?;

        rows.iter()
            .map(|row| {
                HistoryRow::from_row(row)
                    .map_err(storage_error)?
                    .into_record()
            })
            .collect()
    }
}
