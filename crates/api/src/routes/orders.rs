//! Order route handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use badinvstmnt_core::order::{NewOrder, OrderDraft};

use crate::db::OrderGateway;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for the order history listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryParams {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// List a user's orders, newest first.
///
/// GET /orders?userId=
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OrderHistoryParams>,
) -> Result<impl IntoResponse> {
    let user_id = params
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("User ID is required".to_string()))?;

    let orders = OrderGateway::new(state.firestore())
        .list_for_user(&user_id)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch orders. Please try again.", e))?;

    Ok(Json(json!({ "success": true, "orders": orders })))
}

/// Create an order from a checkout payload.
///
/// POST /orders
#[instrument(skip(state, draft))]
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<OrderDraft>,
) -> Result<impl IntoResponse> {
    let order = NewOrder::from_draft(draft)?;

    let order_id = OrderGateway::new(state.firestore())
        .create(&order)
        .await
        .map_err(|e| AppError::upstream("Failed to create order. Please try again.", e))?;

    tracing::info!(order_id = %order_id, total = order.total, "Order stored");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Order created successfully",
            "orderId": order_id,
        })),
    ))
}
