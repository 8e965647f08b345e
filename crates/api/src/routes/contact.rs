//! Contact form route handler.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use badinvstmnt_core::validate;

use crate::db::{InboxGateway, inbox::ContactRecord};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Contact form payload. Every field arrives as free text; validation
/// happens field by field so the first failing rule's message is returned.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Submit a contact form message.
///
/// POST /contact
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<impl IntoResponse> {
    let name = validate::name(form.name.as_deref())?;
    let email = validate::email(form.email.as_deref())?;
    let phone = validate::phone(form.phone.as_deref())?;
    let comment = validate::comment(form.comment.as_deref())?;

    let record = ContactRecord {
        name,
        phone,
        email: email.into_inner(),
        comment,
    };

    let id = InboxGateway::new(state.firestore())
        .create_contact(&record)
        .await
        .map_err(|e| AppError::upstream("Failed to submit contact form. Please try again.", e))?;

    tracing::info!(id = %id, "Contact form stored");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Contact form submitted successfully",
            "id": id,
        })),
    ))
}
