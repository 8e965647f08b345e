//! Newsletter signup route handler.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use badinvstmnt_core::validate;

use crate::db::{InboxGateway, inbox::SubscriberRecord};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Newsletter signup payload.
#[derive(Debug, Deserialize)]
pub struct JoinForm {
    #[serde(default)]
    pub email: Option<String>,
}

/// Subscribe an email address to the newsletter.
///
/// POST /join-us
#[instrument(skip(state, form))]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(form): Json<JoinForm>,
) -> Result<impl IntoResponse> {
    let email = validate::subscriber_email(form.email.as_deref())?;

    let record = SubscriberRecord {
        email: email.into_inner(),
    };

    let id = InboxGateway::new(state.firestore())
        .create_subscriber(&record)
        .await
        .map_err(|e| AppError::upstream("Failed to subscribe email. Please try again.", e))?;

    tracing::info!(id = %id, "Newsletter signup stored");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Email subscribed successfully",
            "id": id,
        })),
    ))
}
