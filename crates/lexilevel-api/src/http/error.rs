//! Application error type mapping to HTTP status codes and envelope format.

use std::collections::HashMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use lexilevel_types::error::{AuthError, RepositoryError, SessionError};

use crate::http::response::{ApiErrorDetail, ApiMeta, ApiResponse};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Sign-up / sign-in failures.
    Auth(AuthError),
    /// Missing or invalid session.
    Session(SessionError),
    /// Storage failures outside the auth flow.
    Repository(RepositoryError),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Repository(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Auth(AuthError::Rejected(msg)) => {
                (StatusCode::UNAUTHORIZED, "AUTH_REJECTED", msg.clone())
            }
            AppError::Auth(AuthError::InvalidCredentials(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Auth(AuthError::ProviderUnavailable(msg)) => (
                StatusCode::BAD_GATEWAY,
                "IDENTITY_UNAVAILABLE",
                format!("Identity provider unavailable: {msg}"),
            ),
            AppError::Auth(e @ AuthError::StorageError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", e.to_string())
            }
            AppError::Session(e @ (SessionError::Missing | SessionError::Invalid)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", e.to_string())
            }
            AppError::Session(e @ SessionError::StorageError(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", e.to_string())
            }
            AppError::Repository(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let request_id = uuid::Uuid::now_v7().to_string();

        if status.is_server_error() {
            tracing::error!(%request_id, code, %message, "request failed");
        } else {
            tracing::debug!(%request_id, code, %message, "request rejected");
        }

        let body: ApiResponse<()> = ApiResponse {
            data: None,
            meta: ApiMeta::new(request_id, 0),
            errors: vec![ApiErrorDetail {
                code: code.to_string(),
                message,
            }],
            links: HashMap::new(),
        };

        (status, Json(body)).into_response()
    }
}
