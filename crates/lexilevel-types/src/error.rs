use thiserror::Error;

/// Errors from account sign-up and sign-in.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The identity provider rejected the request. Carries the provider's
    /// message (e.g. `EMAIL_EXISTS`) or the operation's fallback message.
    #[error("{0}")]
    Rejected(String),

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from session lookups.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not signed in")]
    Missing,

    #[error("session expired or unknown")]
    Invalid,

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in lexilevel-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database unavailable")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display_is_provider_message() {
        let err = AuthError::Rejected("EMAIL_EXISTS".to_string());
        assert_eq!(err.to_string(), "EMAIL_EXISTS");
    }

    #[test]
    fn test_session_error_display() {
        assert_eq!(SessionError::Missing.to_string(), "not signed in");
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
