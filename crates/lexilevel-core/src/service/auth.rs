//! Account and session service.
//!
//! Sign-up and sign-in are delegated to the identity provider. On success a
//! local profile is kept in sync and a server-side session is opened; the
//! plaintext session token is returned to the caller exactly once.

use chrono::{DateTime, Duration, Utc};
use lexilevel_types::error::{AuthError, SessionError};
use lexilevel_types::session::Session;
use lexilevel_types::user::{AuthOperation, Credentials, User, UserId};

use crate::identity::IdentityProvider;
use crate::repository::session::SessionRepository;
use crate::repository::user::UserRepository;
use crate::service::token::SessionTokens;

/// Outcome of a successful sign-up or sign-in.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: User,
    /// Plaintext session token. Only its hash is stored.
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service orchestrating identity provider calls, profiles, and sessions.
pub struct AuthService<I, U, S, T>
where
    I: IdentityProvider,
    U: UserRepository,
    S: SessionRepository,
    T: SessionTokens,
{
    identity: I,
    user_repo: U,
    session_repo: S,
    tokens: T,
    session_ttl: Duration,
}

impl<I, U, S, T> AuthService<I, U, S, T>
where
    I: IdentityProvider,
    U: UserRepository,
    S: SessionRepository,
    T: SessionTokens,
{
    pub fn new(identity: I, user_repo: U, session_repo: S, tokens: T, session_ttl: Duration) -> Self {
        Self {
            identity,
            user_repo,
            session_repo,
            tokens,
            session_ttl,
        }
    }

    /// Create an account with the identity provider and open a session.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<SignedIn, AuthError> {
        validate_credentials(credentials)?;
        let authenticated = self
            .identity
            .authenticate(credentials, AuthOperation::SignUp)
            .await?;

        let user = User {
            id: authenticated.user_id,
            email: credentials.email.trim().to_string(),
            created_at: Utc::now(),
        };
        self.user_repo
            .upsert(&user)
            .await
            .map_err(|e| AuthError::StorageError(e.to_string()))?;

        tracing::info!(user_id = %user.id, "user signed up");
        self.open_session(user).await
    }

    /// Verify credentials with the identity provider and open a session.
    ///
    /// Accounts created outside this application get a local profile on
    /// their first sign-in.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SignedIn, AuthError> {
        validate_credentials(credentials)?;
        let authenticated = self
            .identity
            .authenticate(credentials, AuthOperation::SignIn)
            .await?;

        let existing = self
            .user_repo
            .get_by_id(&authenticated.user_id)
            .await
            .map_err(|e| AuthError::StorageError(e.to_string()))?;

        let user = match existing {
            Some(user) => user,
            None => {
                let user = User {
                    id: authenticated.user_id,
                    email: credentials.email.trim().to_string(),
                    created_at: Utc::now(),
                };
                self.user_repo
                    .upsert(&user)
                    .await
                    .map_err(|e| AuthError::StorageError(e.to_string()))?;
                user
            }
        };

        tracing::info!(user_id = %user.id, "user signed in");
        self.open_session(user).await
    }

    /// End a session. Unknown tokens are ignored.
    pub async fn sign_out(&self, token: &str) -> Result<(), SessionError> {
        let token_hash = self.tokens.hash(token);
        self.session_repo
            .delete(&token_hash)
            .await
            .map_err(|e| SessionError::StorageError(e.to_string()))
    }

    /// Resolve a session token to the signed-in user.
    pub async fn resolve_session(&self, token: &str) -> Result<UserId, SessionError> {
        let token_hash = self.tokens.hash(token);
        let session = self
            .session_repo
            .get_by_hash(&token_hash)
            .await
            .map_err(|e| SessionError::StorageError(e.to_string()))?
            .ok_or(SessionError::Invalid)?;

        if session.is_expired(Utc::now()) {
            // Best effort cleanup; the caller only needs the rejection.
            if let Err(e) = self.session_repo.delete(&token_hash).await {
                tracing::warn!(user_id = %session.user_id, error = %e, "failed to remove expired session");
            }
            return Err(SessionError::Invalid);
        }

        Ok(session.user_id)
    }

    async fn open_session(&self, user: User) -> Result<SignedIn, AuthError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.session_ttl).ok_or_else(|| {
            AuthError::StorageError(format!(
                "session lifetime of {}h is out of range",
                self.session_ttl.num_hours()
            ))
        })?;

        let token = self.tokens.generate();
        let session = Session {
            token_hash: self.tokens.hash(&token),
            user_id: user.id.clone(),
            created_at: now,
            expires_at,
        };

        self.session_repo
            .create(&session)
            .await
            .map_err(|e| AuthError::StorageError(e.to_string()))?;

        Ok(SignedIn {
            user,
            token,
            expires_at: session.expires_at,
        })
    }
}

/// Reject obviously malformed credentials before calling the provider.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), AuthError> {
    let email = credentials.email.trim();
    if email.is_empty() {
        return Err(AuthError::InvalidCredentials("email cannot be empty".to_string()));
    }
    if !email.contains('@') {
        return Err(AuthError::InvalidCredentials(format!(
            "'{email}' is not an email address"
        )));
    }
    if credentials.password.is_empty() {
        return Err(AuthError::InvalidCredentials("password cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexilevel_types::error::RepositoryError;
    use lexilevel_types::user::AuthenticatedUser;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that knows a fixed set of accounts.
    #[derive(Default)]
    struct FakeIdentity {
        accounts: Mutex<HashMap<String, (String, String)>>,
    }

    impl FakeIdentity {
        fn with_account(email: &str, password: &str, id: &str) -> Self {
            let provider = Self::default();
            provider
                .accounts
                .lock()
                .unwrap()
                .insert(email.to_string(), (password.to_string(), id.to_string()));
            provider
        }
    }

    impl IdentityProvider for FakeIdentity {
        async fn authenticate(
            &self,
            credentials: &Credentials,
            operation: AuthOperation,
        ) -> Result<AuthenticatedUser, AuthError> {
            let mut accounts = self.accounts.lock().unwrap();
            match operation {
                AuthOperation::SignUp => {
                    if accounts.contains_key(&credentials.email) {
                        return Err(AuthError::Rejected("EMAIL_EXISTS".to_string()));
                    }
                    let id = format!("uid-{}", accounts.len() + 1);
                    accounts.insert(
                        credentials.email.clone(),
                        (credentials.password.clone(), id.clone()),
                    );
                    Ok(AuthenticatedUser {
                        user_id: UserId::new(id),
                        email: credentials.email.clone(),
                    })
                }
                AuthOperation::SignIn => match accounts.get(&credentials.email) {
                    Some((password, id)) if *password == credentials.password => {
                        Ok(AuthenticatedUser {
                            user_id: UserId::new(id.clone()),
                            email: credentials.email.clone(),
                        })
                    }
                    Some(_) => Err(AuthError::Rejected("INVALID_PASSWORD".to_string())),
                    None => Err(AuthError::Rejected("EMAIL_NOT_FOUND".to_string())),
                },
            }
        }
    }

    #[derive(Default)]
    struct MemoryUsers(Mutex<HashMap<UserId, User>>);

    impl UserRepository for MemoryUsers {
        async fn upsert(&self, user: &User) -> Result<(), RepositoryError> {
            self.0.lock().unwrap().insert(user.id.clone(), user.clone());
            Ok(())
        }

        async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
            Ok(self.0.lock().unwrap().get(id).cloned())
        }
    }

    #[derive(Default)]
    struct MemorySessions(Mutex<HashMap<String, Session>>);

    impl SessionRepository for MemorySessions {
        async fn create(&self, session: &Session) -> Result<(), RepositoryError> {
            self.0
                .lock()
                .unwrap()
                .insert(session.token_hash.clone(), session.clone());
            Ok(())
        }

        async fn get_by_hash(&self, token_hash: &str) -> Result<Option<Session>, RepositoryError> {
            Ok(self.0.lock().unwrap().get(token_hash).cloned())
        }

        async fn delete(&self, token_hash: &str) -> Result<(), RepositoryError> {
            self.0.lock().unwrap().remove(token_hash);
            Ok(())
        }
    }

    /// Sessions that can be read but never deleted.
    #[derive(Default)]
    struct StickySessions(MemorySessions);

    impl SessionRepository for StickySessions {
        async fn create(&self, session: &Session) -> Result<(), RepositoryError> {
            self.0.create(session).await
        }

        async fn get_by_hash(&self, token_hash: &str) -> Result<Option<Session>, RepositoryError> {
            self.0.get_by_hash(token_hash).await
        }

        async fn delete(&self, _token_hash: &str) -> Result<(), RepositoryError> {
            Err(RepositoryError::Connection)
        }
    }

    /// Sequential tokens with a reversible "hash".
    #[derive(Default)]
    struct CountingTokens(AtomicUsize);

    impl SessionTokens for CountingTokens {
        fn generate(&self) -> String {
            format!("tok-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }

        fn hash(&self, token: &str) -> String {
            format!("hash({token})")
        }
    }

    type TestService = AuthService<FakeIdentity, MemoryUsers, MemorySessions, CountingTokens>;

    fn service(identity: FakeIdentity, ttl: Duration) -> TestService {
        AuthService::new(
            identity,
            MemoryUsers::default(),
            MemorySessions::default(),
            CountingTokens::default(),
            ttl,
        )
    }

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_opens_session() {
        let svc = service(FakeIdentity::default(), Duration::hours(1));
        let signed_in = svc.sign_up(&creds("ada@example.com", "pw")).await.unwrap();

        assert_eq!(signed_in.user.email, "ada@example.com");
        let resolved = svc.resolve_session(&signed_in.token).await.unwrap();
        assert_eq!(resolved, signed_in.user.id);
        assert!(svc.user_repo.get_by_id(&resolved).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_surfaces_provider_message() {
        let svc = service(
            FakeIdentity::with_account("ada@example.com", "pw", "uid-a"),
            Duration::hours(1),
        );
        let err = svc.sign_up(&creds("ada@example.com", "pw")).await.unwrap_err();
        assert_eq!(err.to_string(), "EMAIL_EXISTS");
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let svc = service(
            FakeIdentity::with_account("ada@example.com", "pw", "uid-a"),
            Duration::hours(1),
        );
        let err = svc.sign_in(&creds("ada@example.com", "nope")).await.unwrap_err();
        assert!(matches!(err, AuthError::Rejected(msg) if msg == "INVALID_PASSWORD"));
    }

    #[tokio::test]
    async fn test_sign_in_creates_missing_profile() {
        let svc = service(
            FakeIdentity::with_account("ada@example.com", "pw", "uid-a"),
            Duration::hours(1),
        );
        let signed_in = svc.sign_in(&creds("ada@example.com", "pw")).await.unwrap();
        assert_eq!(signed_in.user.id, UserId::new("uid-a"));
        assert!(
            svc.user_repo
                .get_by_id(&UserId::new("uid-a"))
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_sign_out_invalidates_session() {
        let svc = service(FakeIdentity::default(), Duration::hours(1));
        let signed_in = svc.sign_up(&creds("ada@example.com", "pw")).await.unwrap();

        svc.sign_out(&signed_in.token).await.unwrap();
        assert!(matches!(
            svc.resolve_session(&signed_in.token).await,
            Err(SessionError::Invalid)
        ));
        // Signing out twice is fine.
        svc.sign_out(&signed_in.token).await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected_and_removed() {
        let svc = service(FakeIdentity::default(), Duration::zero());
        let signed_in = svc.sign_up(&creds("ada@example.com", "pw")).await.unwrap();

        assert!(matches!(
            svc.resolve_session(&signed_in.token).await,
            Err(SessionError::Invalid)
        ));
        let hash = svc.tokens.hash(&signed_in.token);
        assert!(svc.session_repo.get_by_hash(&hash).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_session_rejected_when_cleanup_fails() {
        let svc = AuthService::new(
            FakeIdentity::default(),
            MemoryUsers::default(),
            StickySessions::default(),
            CountingTokens::default(),
            Duration::zero(),
        );
        let signed_in = svc.sign_up(&creds("ada@example.com", "pw")).await.unwrap();

        assert!(matches!(
            svc.resolve_session(&signed_in.token).await,
            Err(SessionError::Invalid)
        ));
    }

    #[tokio::test]
    async fn test_oversized_session_lifetime_is_an_error() {
        // Far beyond the largest representable timestamp.
        let ttl = Duration::try_days(100_000_000).unwrap();
        let svc = service(FakeIdentity::default(), ttl);

        let err = svc.sign_up(&creds("ada@example.com", "pw")).await.unwrap_err();
        assert!(matches!(err, AuthError::StorageError(msg) if msg.contains("out of range")));
        assert!(svc.session_repo.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_token_is_invalid() {
        let svc = service(FakeIdentity::default(), Duration::hours(1));
        assert!(matches!(
            svc.resolve_session("tok-404").await,
            Err(SessionError::Invalid)
        ));
    }

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials(&creds("a@b.c", "pw")).is_ok());
        assert!(matches!(
            validate_credentials(&creds("  ", "pw")),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(validate_credentials(&creds("not-an-email", "pw")).is_err());
        assert!(validate_credentials(&creds("a@b.c", "")).is_err());
    }
}
