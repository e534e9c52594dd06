/*
 * Responsibility
 * - The "authenticated context" type handlers see
 * - Middleware extracts the key and stores it in request extensions; handlers only receive this type
 *
 * Notes
 * - Parsing of the Authorization header lives in services::auth
 * - The key is not checked against any store here
 */
use crate::services::auth::key_fingerprint;

/// Context attached to a request that presented `Authorization: ApiKey <token>`.
///
/// Only the fingerprint (base64url(SHA-256(key))) is kept; the raw key is
/// dropped once the middleware has hashed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyCtx {
    pub fingerprint: String,
}

impl ApiKeyCtx {
    pub fn new(key: &str) -> Self {
        Self {
            fingerprint: key_fingerprint(key),
        }
    }
}
