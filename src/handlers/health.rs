use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::AppState;

/// Health check endpoint for Docker/K8s liveness probes.
///
/// No side effects and nothing to block on: the service has no backing
/// stores, so liveness reduces to answering at all.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "uptime": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
