//! Plain HTTP endpoints served next to the handlers.

use axum::Json;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
