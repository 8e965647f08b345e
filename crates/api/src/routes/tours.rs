//! Tour date route handlers.

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use tracing::instrument;

use crate::db::TourGateway;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// List all tour dates, soonest first.
///
/// GET /tours
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let tours = TourGateway::new(state.firestore())
        .list()
        .await
        .map_err(|e| AppError::upstream("Failed to fetch tours. Please try again.", e))?;

    Ok(Json(json!({ "success": true, "tours": tours })))
}
