use axum::{response::IntoResponse, Json};
use serde_json::json;

pub const SERVICE_NAME: &str = "flumen-backend";

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
    }))
}
