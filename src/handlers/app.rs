use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::error::AppError;

/// Root landing route.
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "Hello from the CI/CD sample service!",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Catch-all for unmatched method/path combinations.
pub async fn route_not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Route not found"))
}
