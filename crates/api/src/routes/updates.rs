//! News update route handlers.

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use tracing::instrument;

use crate::db::UpdateGateway;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// List all updates, newest first.
///
/// GET /updates
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let updates = UpdateGateway::new(state.firestore())
        .list()
        .await
        .map_err(|e| AppError::upstream("Failed to fetch updates. Please try again.", e))?;

    Ok(Json(json!({ "success": true, "updates": updates })))
}
