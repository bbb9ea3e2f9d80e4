//! HTTP API handlers.

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Path of the hello endpoint.
pub const HELLO_PATH: &str = "/api/hello";

/// Fixed greeting returned by the hello endpoint.
pub const HELLO_MESSAGE: &str = "Hello Vibe!";

/// Hello endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponse {
    /// Always [`HELLO_MESSAGE`].
    pub message: String,
}

impl HelloResponse {
    /// The one payload the service ever returns.
    pub fn new() -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
        }
    }
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Error body for unmatched routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason, naming the unmatched path.
    pub error: String,
}

/// Hello handler - always returns 200 with the fixed payload.
pub async fn hello() -> impl IntoResponse {
    debug!("Serving hello payload");
    Json(HelloResponse::new())
}

/// Fallback handler - 404 for any route that is not registered.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("not found: {}", uri.path()),
        }),
    )
}
