//! API error types with IntoResponse
//!
//! Every error body has the shape `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed path or body (400)
    Validation(ValidationError),

    /// Target row doesn't exist (404)
    NotFound { resource: &'static str, id: String },

    /// No pooled connection within the acquire timeout (503, logged)
    Unavailable(DbError),

    /// Any other storage failure (500, logged). `message` is the static
    /// per-endpoint text sent to the client.
    Storage {
        source: DbError,
        message: &'static str,
    },

    /// A storage task panicked or was cancelled (500, logged at the call site)
    Internal { message: &'static str },

    /// Body could not be read at all, e.g. over the size limit. Keeps the
    /// status axum chose.
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    /// Classify a storage error for an endpoint.
    pub fn storage(source: DbError, message: &'static str) -> Self {
        if source.is_unavailable() {
            Self::Unavailable(source)
        } else {
            Self::Storage { source, message }
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Storage { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::Unavailable(e) => {
                tracing::error!("Storage unavailable: {}", e);
                "storage unavailable".to_string()
            }
            Self::Storage { source, message } => {
                // Log the actual error, return the endpoint's static message
                tracing::error!(error = %source, "{}", message);
                message.to_string()
            }
            Self::Internal { message } => message.to_string(),
            Self::Rejected { message, .. } => message.clone(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "id: must be an integer");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::not_found("tool", 42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "tool '42' not found");
    }

    #[tokio::test]
    async fn storage_error_hides_details() {
        let source = DbError::from(sqlx::Error::Protocol("connection reset".into()));
        let response = ApiError::storage(source, "Failed to fetch tools").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to fetch tools" })
        );
    }

    #[tokio::test]
    async fn pool_timeout_is_503() {
        let source = DbError::from(sqlx::Error::PoolTimedOut);
        let response = ApiError::storage(source, "Failed to fetch tools").into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["error"], "storage unavailable");
    }
}
