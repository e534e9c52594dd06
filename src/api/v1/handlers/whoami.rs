/*
 * Responsibility
 * - GET /api/v1/whoami
 * - Echo which credential the request presented, as a fingerprint only
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyCtxExtractor;
use crate::services::auth::API_KEY_SCHEME;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub scheme: &'static str,
    pub fingerprint: String,
}

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        scheme: API_KEY_SCHEME,
        fingerprint: ctx.fingerprint,
    })
}
