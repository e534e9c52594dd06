/*
 * Responsibility
 * - URL layout of v1
 * - Decide here which routes sit behind the api key middleware
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::whoami::whoami;
use crate::middleware;

pub fn routes() -> Router {
    let protected = Router::new().route("/whoami", get(whoami));
    middleware::auth::api_key::apply(protected)
}
