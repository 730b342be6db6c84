//! IdentityToolkitClient -- concrete [`IdentityProvider`] for the Google
//! Identity Toolkit REST API (the email/password backend of Firebase Auth).
//!
//! The web API key is wrapped in [`secrecy::SecretString`] and is only
//! exposed when building the request URL, which is never logged.

use std::time::Duration;

use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

use lexilevel_core::identity::IdentityProvider;
use lexilevel_types::config::IdentityConfig;
use lexilevel_types::error::AuthError;
use lexilevel_types::user::{AuthOperation, AuthenticatedUser, Credentials, UserId};

/// Identity Toolkit client.
pub struct IdentityToolkitClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

impl IdentityToolkitClient {
    pub fn new(api_key: SecretString, base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to create identity HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from config, reading the API key from the environment
    /// variable named by `config.api_key_env`.
    pub fn from_config(config: &IdentityConfig) -> anyhow::Result<Self> {
        let api_key = std::env::var(&config.api_key_env).with_context(|| {
            format!(
                "identity API key not set (expected environment variable {})",
                config.api_key_env
            )
        })?;
        Self::new(
            SecretString::from(api_key),
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn endpoint(operation: AuthOperation) -> &'static str {
        match operation {
            AuthOperation::SignUp => "accounts:signUp",
            AuthOperation::SignIn => "accounts:signInWithPassword",
        }
    }

    fn url(&self, operation: AuthOperation) -> String {
        format!(
            "{}/v1/{}?key={}",
            self.base_url,
            Self::endpoint(operation),
            self.api_key.expose_secret()
        )
    }
}

/// Interpret an Identity Toolkit response body.
///
/// Success is keyed on the fields the provider returns, not the HTTP status:
/// sign-up needs `localId`, sign-in needs `idToken` and `localId`. Anything
/// else is a rejection carrying `error.message` or the fallback message.
pub fn interpret_response(
    body: &Value,
    operation: AuthOperation,
    email: &str,
) -> Result<AuthenticatedUser, AuthError> {
    let local_id = body.get("localId").and_then(Value::as_str);
    let succeeded = match operation {
        AuthOperation::SignUp => local_id.is_some(),
        AuthOperation::SignIn => body.get("idToken").is_some() && local_id.is_some(),
    };

    if let (true, Some(local_id)) = (succeeded, local_id) {
        let email = body
            .get("email")
            .and_then(Value::as_str)
            .unwrap_or(email)
            .to_string();
        return Ok(AuthenticatedUser {
            user_id: UserId::new(local_id),
            email,
        });
    }

    let message = body
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or(operation.fallback_message());
    Err(AuthError::Rejected(message.to_string()))
}

impl IdentityProvider for IdentityToolkitClient {
    async fn authenticate(
        &self,
        credentials: &Credentials,
        operation: AuthOperation,
    ) -> Result<AuthenticatedUser, AuthError> {
        let email = credentials.email.trim();
        let payload = PasswordRequest {
            email,
            password: &credentials.password,
            return_secure_token: true,
        };

        tracing::debug!(%operation, email, "calling identity provider");

        let response = self
            .client
            .post(self.url(operation))
            .json(&payload)
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.without_url().to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(format!("invalid response body: {}", e.without_url())))?;

        let result = interpret_response(&body, operation, email);
        if let Err(ref e) = result {
            tracing::info!(%operation, %status, error = %e, "identity provider rejected request");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::Router;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::routing::post;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_interpret_sign_up_success() {
        let body = json!({"localId": "uid-1", "email": "ada@example.com", "idToken": "t"});
        let user = interpret_response(&body, AuthOperation::SignUp, "ada@example.com").unwrap();
        assert_eq!(user.user_id, UserId::new("uid-1"));
    }

    #[test]
    fn test_interpret_sign_in_requires_id_token() {
        let body = json!({"localId": "uid-1"});
        let err = interpret_response(&body, AuthOperation::SignIn, "a@b.c").unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
    }

    #[test]
    fn test_interpret_provider_error_message() {
        let body = json!({"error": {"code": 400, "message": "EMAIL_EXISTS"}});
        let err = interpret_response(&body, AuthOperation::SignUp, "a@b.c").unwrap_err();
        assert_eq!(err.to_string(), "EMAIL_EXISTS");
    }

    #[test]
    fn test_interpret_fallback_messages() {
        let body = json!({});
        assert_eq!(
            interpret_response(&body, AuthOperation::SignUp, "a@b.c")
                .unwrap_err()
                .to_string(),
            "Signup failed"
        );
        assert_eq!(
            interpret_response(&body, AuthOperation::SignIn, "a@b.c")
                .unwrap_err()
                .to_string(),
            "Login failed"
        );
    }

    /// Minimal stand-in for the Identity Toolkit endpoints on a random port.
    async fn spawn_fake_toolkit() -> String {
        async fn handle(
            Path(action): Path<String>,
            Query(query): Query<HashMap<String, String>>,
            Json(body): Json<Value>,
        ) -> (StatusCode, Json<Value>) {
            if query.get("key").map(String::as_str) != Some("test-key") {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": {"message": "API_KEY_INVALID"}})),
                );
            }
            assert_eq!(body["returnSecureToken"], json!(true));
            match (action.as_str(), body["password"].as_str()) {
                ("accounts:signUp", _) => (
                    StatusCode::OK,
                    Json(json!({"localId": "uid-new", "email": body["email"], "idToken": "t"})),
                ),
                ("accounts:signInWithPassword", Some("correct")) => (
                    StatusCode::OK,
                    Json(json!({"localId": "uid-1", "email": body["email"], "idToken": "t"})),
                ),
                _ => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": {"message": "INVALID_PASSWORD"}})),
                ),
            }
        }

        let app = Router::new().route("/v1/{action}", post(handle));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn creds(password: &str) -> Credentials {
        Credentials {
            email: "ada@example.com".to_string(),
            password: password.to_string(),
        }
    }

    fn client(base_url: String, key: &str) -> IdentityToolkitClient {
        IdentityToolkitClient::new(SecretString::from(key.to_string()), base_url, Duration::from_secs(5))
            .unwrap()
    }

    #[tokio::test]
    async fn test_sign_up_and_sign_in_over_http() {
        let base_url = spawn_fake_toolkit().await;
        let client = client(base_url, "test-key");

        let user = client
            .authenticate(&creds("anything"), AuthOperation::SignUp)
            .await
            .unwrap();
        assert_eq!(user.user_id, UserId::new("uid-new"));

        let user = client
            .authenticate(&creds("correct"), AuthOperation::SignIn)
            .await
            .unwrap();
        assert_eq!(user.user_id, UserId::new("uid-1"));
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_rejection_over_http() {
        let base_url = spawn_fake_toolkit().await;
        let err = client(base_url, "test-key")
            .authenticate(&creds("wrong"), AuthOperation::SignIn)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Rejected(msg) if msg == "INVALID_PASSWORD"));
    }

    #[tokio::test]
    async fn test_bad_key_over_http() {
        let base_url = spawn_fake_toolkit().await;
        let err = client(base_url, "wrong-key")
            .authenticate(&creds("correct"), AuthOperation::SignIn)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "API_KEY_INVALID");
    }

    #[tokio::test]
    async fn test_unreachable_provider() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(format!("http://{addr}"), "test-key")
            .authenticate(&creds("correct"), AuthOperation::SignIn)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::ProviderUnavailable(_)));
    }
}
