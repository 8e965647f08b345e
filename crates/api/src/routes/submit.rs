//! Music submission route handler.
//!
//! Takes signup pitches from both businesses and artists. Unlike the
//! contact form, the name field accepts any characters (stage names).

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use badinvstmnt_core::types::SubmissionType;
use badinvstmnt_core::validate;

use crate::db::{InboxGateway, inbox::SubmissionRecord};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Music submission payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitForm {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub submission_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
}

/// Submit a music pitch.
///
/// POST /submit
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<SubmitForm>,
) -> Result<impl IntoResponse> {
    let role = validate::submitter_role(form.role.as_deref())?;
    let submission_type = SubmissionType::from_form_value(form.submission_type.as_deref());
    let name = validate::name_loose(form.name.as_deref())?;
    let email = validate::email(form.email.as_deref())?;
    let phone = validate::phone(form.phone.as_deref())?;
    let artist = validate::artist_name(form.artist.as_deref())?;
    let profile = validate::music_profile(form.profile.as_deref())?;

    let record = SubmissionRecord {
        role: role.to_string(),
        submission_type: submission_type.to_string(),
        name,
        phone,
        email: email.into_inner(),
        artist,
        profile,
    };

    let id = InboxGateway::new(state.firestore())
        .create_submission(&record)
        .await
        .map_err(|e| AppError::upstream("Failed to submit music. Please try again.", e))?;

    tracing::info!(id = %id, "Music submission stored");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Music submission received successfully",
            "id": id,
        })),
    ))
}
