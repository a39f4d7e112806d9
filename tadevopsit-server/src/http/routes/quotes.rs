//! Quote endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::IdParam;
use crate::http::routes::detached;
use crate::models::Quote;
use crate::state::AppState;

const FETCH_FAILED: &str = "Failed to fetch quotes";
const RANDOM_FAILED: &str = "Failed to fetch random quote";
const FAVORITE_FAILED: &str = "Failed to favorite quote";

/// GET /quotes - most favorited first
async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, ApiError> {
    let quotes = state
        .store()
        .list_quotes()
        .await
        .map_err(|e| ApiError::storage(e, FETCH_FAILED))?;

    Ok(Json(quotes))
}

/// GET /quotes/random - one quote, or 204 when there are none
async fn random_quote(State(state): State<AppState>) -> Result<Response, ApiError> {
    let quote = state
        .store()
        .random_quote()
        .await
        .map_err(|e| ApiError::storage(e, RANDOM_FAILED))?;

    Ok(match quote {
        Some(quote) => Json(quote).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// PUT /quotes/{id}/favorite
async fn favorite_quote(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<Json<Quote>, ApiError> {
    let store = state.store();
    let quote = detached(async move { store.favorite_quote(id).await }, FAVORITE_FAILED)
        .await?
        .ok_or_else(|| ApiError::not_found("quote", id))?;

    Ok(Json(quote))
}

/// Quote routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quotes", get(list_quotes))
        .route("/quotes/random", get(random_quote))
        .route("/quotes/{id}/favorite", put(favorite_quote))
}
