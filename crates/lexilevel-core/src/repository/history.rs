//! History repository trait definition.

use lexilevel_types::error::RepositoryError;
use lexilevel_types::history::HistoryRecord;
use lexilevel_types::user::UserId;

/// Per-user, append-only store of submission results.
///
/// Implementations live in lexilevel-infra (e.g., SqliteHistoryRepository).
pub trait HistoryRepository: Send + Sync {
    /// Append a record to the user's history.
    fn append(
        &self,
        user_id: &UserId,
        record: &HistoryRecord,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// All records for the user, newest first. No pagination.
    fn list_history(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<HistoryRecord>, RepositoryError>> + Send;
}
