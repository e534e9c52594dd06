//! `Authorization: ApiKey <token>` extraction → put ApiKeyCtx into extensions
//!
//! The key is only extracted here, never checked against a store. Handlers
//! that need the caller's identity take `ApiKeyCtxExtractor`.

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;

/// Apply API key extraction to every route of `router`.
///
/// Example:
/// ```ignore
/// let protected = middleware::auth::api_key::apply(api::v1::protected_routes());
/// app = app.nest("/api/v1", protected);
/// ```
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let ctx = match get_api_key(req.headers()) {
        Ok(key) => ApiKeyCtx::new(key),
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key extraction failed"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(fingerprint = %ctx.fingerprint, "api key accepted");

    // middleware → extractor hand-off
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
