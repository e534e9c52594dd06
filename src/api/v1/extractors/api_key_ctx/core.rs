use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::ApiKeyCtx;

/// Extractor for handlers that need the caller's `ApiKeyCtx`.
/// Assumes the api_key middleware already inserted it into request.extensions().
/// Missing context means the route is not behind the middleware; reject with 401.
pub struct ApiKeyCtxExtractor(pub ApiKeyCtx);

impl<S> FromRequestParts<S> for ApiKeyCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKeyCtx>()
            .cloned()
            .map(ApiKeyCtxExtractor)
            .ok_or(AppError::Unauthorized)
    }
}
