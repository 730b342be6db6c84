//! Session repository trait definition.

use lexilevel_types::error::RepositoryError;
use lexilevel_types::session::Session;

/// Storage for login sessions, keyed by token hash.
pub trait SessionRepository: Send + Sync {
    fn create(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    fn get_by_hash(
        &self,
        token_hash: &str,
    ) -> impl std::future::Future<Output = Result<Option<Session>, RepositoryError>> + Send;

    /// Delete a session. Deleting an unknown hash is not an error.
    fn delete(
        &self,
        token_hash: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
