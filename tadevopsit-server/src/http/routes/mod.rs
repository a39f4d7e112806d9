//! Route handlers organized by resource

pub mod health;
pub mod progress;
pub mod quotes;
pub mod voting;

use std::future::Future;

use axum::Router;

use crate::db::DbError;
use crate::http::error::ApiError;
use crate::state::AppState;

/// Every resource router, relative to the `/api` prefix
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(progress::router())
        .merge(quotes::router())
        .merge(voting::router())
}

/// Run a write on its own task so a dropped request can't cancel it halfway.
pub(crate) async fn detached<T, F>(write: F, message: &'static str) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, DbError>> + Send + 'static,
    T: Send + 'static,
{
    match tokio::spawn(write).await {
        Ok(result) => result.map_err(|e| ApiError::storage(e, message)),
        Err(e) => {
            tracing::error!(error = %e, "Storage task did not finish");
            Err(ApiError::Internal { message })
        }
    }
}
