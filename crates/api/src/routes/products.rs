//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use tracing::instrument;

use crate::db::ProductGateway;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// List all products.
///
/// GET /products
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = ProductGateway::new(state.firestore())
        .list()
        .await
        .map_err(|e| AppError::upstream("Failed to fetch products. Please try again.", e))?;

    Ok(Json(json!({ "success": true, "products": products })))
}

/// Fetch a single product by id.
///
/// GET /products/{id}
#[instrument(skip(state))]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let product = ProductGateway::new(state.firestore())
        .get(&id)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch product. Please try again.", e))?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(json!({ "success": true, "product": product })))
}
