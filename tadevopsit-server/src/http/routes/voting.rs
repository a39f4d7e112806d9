//! Voting board endpoints

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::IdParam;
use crate::http::routes::detached;
use crate::models::Tool;
use crate::state::AppState;

const FETCH_FAILED: &str = "Failed to fetch tools";
const VOTE_FAILED: &str = "Failed to vote for tool";

/// GET /voting - category ascending, votes descending
async fn list_tools(State(state): State<AppState>) -> Result<Json<Vec<Tool>>, ApiError> {
    let tools = state
        .store()
        .list_tools()
        .await
        .map_err(|e| ApiError::storage(e, FETCH_FAILED))?;

    Ok(Json(tools))
}

/// PUT /voting/{id}/vote
async fn vote_tool(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Tool>, ApiError> {
    let store = state.store();
    let tool = detached(async move { store.vote_tool(id).await }, VOTE_FAILED)
        .await?
        .ok_or_else(|| ApiError::not_found("tool", id))?;

    tracing::debug!(id, votes = tool.votes, "Vote recorded");
    Ok(Json(tool))
}

/// Voting routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/voting", get(list_tools))
        .route("/voting/{id}/vote", put(vote_tool))
}
