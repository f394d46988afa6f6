//! HTTP routes
//!
//! - `health` - liveness probe
//! - `demo` - simulated dashboard and cutoff
//!
//! `create_router` wires them onto one axum Router with CORS and request
//! tracing applied. Unknown paths and wrong methods answer with JSON errors.

pub mod demo;
pub mod health;

use axum::{
    http::{HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app_state::SharedState;

/// Router with all routes, CORS from config and request tracing.
pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);
    Router::new()
        .route("/health", get(health::health))
        .route("/demo/dashboard", get(demo::dashboard))
        .route("/demo/cutoff", post(demo::cutoff))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Credentialed CORS for a fixed origin list. Methods and headers are
/// mirrored from the preflight since wildcards are not allowed together with
/// credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let mut list: Vec<HeaderValue> = Vec::new();
    for part in origins.iter().map(|s| s.trim()) {
        if part.is_empty() {
            continue;
        }
        match HeaderValue::from_str(part) {
            Ok(hv) => list.push(hv),
            Err(_) => tracing::warn!(origin = %part, "skipping invalid CORS origin"),
        }
    }
    if list.is_empty() {
        // no valid origins -> deny cross-origin
        return CorsLayer::new().allow_methods(AllowMethods::mirror_request());
    }
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(list))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not found",
            "path": uri.path(),
        })),
    )
}

async fn method_not_allowed(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "error": "method not allowed",
            "method": method.as_str(),
            "path": uri.path(),
        })),
    )
}
