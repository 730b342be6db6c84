//! Identity provider port.
//!
//! Account creation and password checks are delegated to a hosted identity
//! service. The REST adapter lives in lexilevel-infra.

use lexilevel_types::error::AuthError;
use lexilevel_types::user::{AuthOperation, AuthenticatedUser, Credentials};

/// A hosted identity service that signs users up and in.
pub trait IdentityProvider: Send + Sync {
    /// Perform `operation` with the given credentials.
    ///
    /// Rejections carry the provider's message in [`AuthError::Rejected`].
    fn authenticate(
        &self,
        credentials: &Credentials,
        operation: AuthOperation,
    ) -> impl std::future::Future<Output = Result<AuthenticatedUser, AuthError>> + Send;
}
