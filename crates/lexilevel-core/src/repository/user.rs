//! User profile repository trait definition.

use lexilevel_types::error::RepositoryError;
use lexilevel_types::user::{User, UserId};

/// Local profile records keyed by the identity provider's user id.
pub trait UserRepository: Send + Sync {
    /// Insert or replace the profile for `user.id`.
    fn upsert(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    fn get_by_id(
        &self,
        id: &UserId,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;
}
