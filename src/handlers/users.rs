use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::error::AppError;
use crate::AppState;

/// List the full seeded user collection in insertion order.
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.users.all();
    Json(json!({
        "users": users,
        "count": users.len(),
    }))
}

/// Look up a single user by id.
///
/// The id is extracted as a raw segment and parsed here so that a
/// non-numeric id falls through to the same 404 as an unknown one,
/// rather than the extractor's 400.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = id
        .parse::<u64>()
        .ok()
        .and_then(|id| state.users.get(id).cloned())
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("User not found")))?;

    Ok(Json(user))
}
