use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::{json, Value};

/// Reflect the submitted JSON body back to the caller, byte-for-byte in
/// value terms: no normalization, no field stripping.
pub async fn echo(Json(body): Json<Value>) -> impl IntoResponse {
    Json(json!({
        "received": body,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
