/*!
 * API key context extractor
 *
 * Responsibility:
 * - Hand the authenticated request context (ApiKeyCtx) to handlers
 * - axum-specific code stays in core; the type lives in types
 *
 * Public API:
 * - ApiKeyCtx
 * - ApiKeyCtxExtractor
 */

mod core;
mod types;

pub use self::core::ApiKeyCtxExtractor;
pub use types::ApiKeyCtx;
