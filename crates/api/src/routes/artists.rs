//! Artist catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use tracing::instrument;

use crate::db::ArtistGateway;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// List all artists.
///
/// GET /artists
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let artists = ArtistGateway::new(state.firestore())
        .list()
        .await
        .map_err(|e| AppError::upstream("Failed to fetch artists. Please try again.", e))?;

    Ok(Json(json!({ "success": true, "artists": artists })))
}

/// Fetch a single artist by slug.
///
/// GET /artists/{slug}
#[instrument(skip(state))]
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let artist = ArtistGateway::new(state.firestore())
        .get_by_slug(&slug)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch artist. Please try again.", e))?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    Ok(Json(json!({ "success": true, "artist": artist })))
}
