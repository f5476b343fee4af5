//! Query string extractor reporting rejections as [`AppError`].

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Like `axum::extract::Query`, but a malformed query string answers 400
/// `QUERY_EXTRACTION` with the standard error body.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
///
/// async fn list(QueryParams(page): QueryParams<PageRequest>) -> String {
///     format!("page {}", page.page)
/// }
/// ```
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::QueryExtractorRejection(e).into_response())?;

        Ok(QueryParams(params))
    }
}
