//! HTTP API route definitions.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{hello, not_found, HELLO_PATH};
use crate::metrics;

/// Label used for requests that matched no route.
const UNMATCHED_PATH: &str = "unmatched";

/// Create the API router.
pub fn create_router() -> Router {
    hello_router()
        .fallback(not_found)
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
}

/// Create a bare router with only the hello route (no fallback, no layers).
pub fn hello_router() -> Router {
    Router::new().route(HELLO_PATH, get(hello))
}

/// Count requests and record latency, labelled by matched route.
async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned());

    let response = next.run(request).await;

    metrics::record_http_latency(start, &path);
    metrics::inc_http_requests(&path, response.status().as_u16());

    response
}
