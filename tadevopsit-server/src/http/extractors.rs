//! Custom Axum extractors
//!
//! Path segments and JSON bodies are parsed into typed values here, so a
//! malformed request gets a 400 and never reaches storage.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Parse the single path parameter as an integer named `field`.
async fn int_param<S>(parts: &mut Parts, state: &S, field: &'static str) -> Result<i32, ApiError>
where
    S: Send + Sync,
{
    let Path(raw): Path<String> = Path::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field,
                reason: "missing path parameter",
            })
        })?;

    raw.trim().parse().map_err(|_| {
        ApiError::Validation(ValidationError::InvalidFormat {
            field,
            reason: "must be an integer",
        })
    })
}

/// `{day}` path parameter. Range is not checked here; an unknown day is a
/// 404 from storage.
pub struct DayParam(pub i32);

impl<S> FromRequestParts<S> for DayParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        int_param(parts, state, "day").await.map(Self)
    }
}

/// `{id}` path parameter
pub struct IdParam(pub i32);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        int_param(parts, state, "id").await.map(Self)
    }
}

/// JSON body whose rejection uses the API error shape
///
/// Anything wrong with the JSON itself is a 400. A body that could not be
/// buffered keeps its own status (413 over the size limit).
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::BytesRejection(_) => ApiError::Rejected {
                    status: rejection.status(),
                    message: rejection.body_text(),
                },
                _ => ApiError::Validation(ValidationError::InvalidBody {
                    reason: rejection.body_text(),
                }),
            })?;
        Ok(Self(value))
    }
}
