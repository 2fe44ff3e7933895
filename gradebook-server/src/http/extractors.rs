//! Custom Axum extractors
//!
//! All of them reject with `ApiError::BadRequest` so malformed input gets the
//! same `{"error": ...}` body as every other failure.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams};

/// Extract an integer record id from the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        id.parse::<i64>().map(Self).map_err(|_| invalid_id())
    }
}

fn invalid_id() -> ApiError {
    ApiError::BadRequest {
        message: "id must be an integer".into(),
    }
}

/// Lenient `?page=&limit=` extractor.
///
/// The query string is decoded as raw pairs so repeated keys (first one
/// wins) and unparseable values fall back to defaults instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(PaginationParams::from_pairs(pairs).into()))
    }
}

/// JSON body extractor that reports every rejection as a 400
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
