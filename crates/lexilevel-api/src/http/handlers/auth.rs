//! Sign-up, sign-in, and sign-out handlers.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::Json;
use serde_json::json;

use lexilevel_core::service::auth::SignedIn;
use lexilevel_types::user::Credentials;

use crate::http::error::AppError;
use crate::http::extractors::session::{clear_session_cookie, session_cookie, session_token};
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

type SessionResponse = ([(axum::http::HeaderName, String); 1], Json<ApiResponse<serde_json::Value>>);

fn session_response(timer: RequestTimer, signed_in: SignedIn) -> SessionResponse {
    let cookie = session_cookie(&signed_in.token, signed_in.expires_at);
    let data = json!({
        "user": signed_in.user,
        "token": signed_in.token,
        "expires_at": signed_in.expires_at,
    });
    let resp = timer.success(data).with_link("home", "/api/v1/home");
    ([(SET_COOKIE, cookie)], Json(resp))
}

/// POST /api/v1/auth/signup - Create an account and sign in.
pub async fn signup(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<SessionResponse, AppError> {
    let timer = RequestTimer::start();
    let signed_in = state.auth_service.sign_up(&credentials).await?;
    Ok(session_response(timer, signed_in))
}

/// POST /api/v1/auth/login - Sign in with email and password.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<SessionResponse, AppError> {
    let timer = RequestTimer::start();
    let signed_in = state.auth_service.sign_in(&credentials).await?;
    Ok(session_response(timer, signed_in))
}

/// POST /api/v1/auth/logout - End the current session, if any.
///
/// Always succeeds and clears the cookie. A session row that cannot be
/// deleted stays until it expires.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> SessionResponse {
    let timer = RequestTimer::start();
    if let Some(token) = session_token(&headers) {
        if let Err(e) = state.auth_service.sign_out(&token).await {
            tracing::warn!(request_id = %timer.request_id, error = %e, "failed to delete session on logout");
        }
    }

    let resp = timer
        .success(json!({ "signed_out": true }))
        .with_link("login", "/api/v1/auth/login");
    ([(SET_COOKIE, clear_session_cookie())], Json(resp))
}
