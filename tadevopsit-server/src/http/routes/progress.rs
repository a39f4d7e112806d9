//! Progress endpoints

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, DayParam};
use crate::http::routes::detached;
use crate::models::{ProgressEntry, ProgressUpdate};
use crate::state::AppState;

const FETCH_FAILED: &str = "Failed to fetch progress";
const UPDATE_FAILED: &str = "Failed to update progress";

/// GET /progress - all 30 days, ascending
async fn list_progress(State(state): State<AppState>) -> Result<Json<Vec<ProgressEntry>>, ApiError> {
    let entries = state
        .store()
        .list_progress()
        .await
        .map_err(|e| ApiError::storage(e, FETCH_FAILED))?;

    Ok(Json(entries))
}

/// PUT /progress/{day} - set completion and feedback
async fn update_progress(
    State(state): State<AppState>,
    DayParam(day): DayParam,
    ApiJson(update): ApiJson<ProgressUpdate>,
) -> Result<Json<ProgressEntry>, ApiError> {
    tracing::debug!(day, completed = update.completed, "Updating progress");

    let store = state.store();
    let entry = detached(
        async move { store.update_progress(day, update).await },
        UPDATE_FAILED,
    )
    .await?
    .ok_or_else(|| ApiError::not_found("progress day", day))?;

    Ok(Json(entry))
}

/// Progress routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/progress", get(list_progress))
        .route("/progress/{day}", put(update_progress))
}
