//! Combined view/submit endpoint: assess a text and list past results.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use lexilevel_types::assessment::RecommendationResult;
use lexilevel_types::history::HistoryRecord;

use crate::http::error::AppError;
use crate::http::extractors::session::CurrentUser;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Body of a text submission.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
    /// Comma-separated interests, e.g. `"music, travel"`.
    pub hobbies: String,
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    /// Result of this request's submission; `None` on plain GET.
    pub result: Option<RecommendationResult>,
    /// Previous submissions, newest first.
    pub history: Vec<HistoryRecord>,
}

/// GET /api/v1/home - Past results for the signed-in user.
pub async fn get_home(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ApiResponse<HomeView>>, AppError> {
    let timer = RequestTimer::start();
    let history = state.assessment_service.history(&user_id).await?;

    let resp = timer
        .success(HomeView {
            result: None,
            history,
        })
        .with_link("self", "/api/v1/home");
    Ok(Json(resp))
}

/// POST /api/v1/home - Assess a text, recommend content, store the result.
pub async fn submit(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(body): Json<SubmitRequest>,
) -> Result<Json<ApiResponse<HomeView>>, AppError> {
    let timer = RequestTimer::start();
    let evaluation = state
        .assessment_service
        .submit(&user_id, &body.text, &body.hobbies)
        .await;
    let history = state.assessment_service.history(&user_id).await?;

    let resp = timer
        .success(HomeView {
            result: Some(evaluation.result),
            history,
        })
        .with_link("self", "/api/v1/home");
    Ok(Json(resp))
}
