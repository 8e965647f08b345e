//! Field validators shared by every form boundary.
//!
//! One module holds the rules for all submitted fields so the API handlers
//! and any future client-side mirror cannot drift apart. Each validator is a
//! pure function: it checks shape, format, and length in a fixed order,
//! short-circuits on the first failure, and returns the normalized value.
//!
//! Error strings are shown to the submitter verbatim, so they are fixed,
//! user-facing messages.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::email::EmailError;
use crate::types::{Email, SubmitterRole};

/// Allowed characters for a person's name on the contact form.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("valid regex"));

/// A failed field validation, carrying the message surfaced to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

impl ValidationError {
    /// The user-facing message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        self.0
    }
}

impl From<EmailError> for ValidationError {
    fn from(err: EmailError) -> Self {
        Self(match err {
            EmailError::Empty => "Email is required",
            EmailError::TooLong => "Email must be less than 254 characters",
            EmailError::Invalid => "Invalid email format",
            EmailError::Rejected => "Please enter a valid email address",
        })
    }
}

/// Validate a required name: trimmed, 2-100 characters, restricted charset.
///
/// # Errors
///
/// Returns the first failing rule's message.
pub fn name(input: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = name_loose(input)?;
    if !NAME_PATTERN.is_match(&trimmed) {
        return Err(ValidationError(
            "Name can only contain letters, spaces, hyphens, and apostrophes",
        ));
    }
    Ok(trimmed)
}

/// Validate a required name without the charset restriction.
///
/// The music-submission form accepts any characters (stage names), only
/// enforcing presence and length.
///
/// # Errors
///
/// Returns the first failing rule's message.
pub fn name_loose(input: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError("Name is required"));
    }
    // Length rules count characters, not bytes: non-ASCII names must not
    // hit the caps early.
    let length = trimmed.chars().count();
    if length < 2 {
        return Err(ValidationError("Name must be at least 2 characters"));
    }
    if length > 100 {
        return Err(ValidationError("Name must be less than 100 characters"));
    }
    Ok(trimmed.to_string())
}

/// Validate a required email with both loose and strict patterns.
///
/// # Errors
///
/// Returns the first failing rule's message.
pub fn email(input: Option<&str>) -> Result<Email, ValidationError> {
    let raw = input.ok_or(ValidationError("Email is required"))?;
    Ok(Email::parse(raw)?)
}

/// Validate a newsletter signup email.
///
/// Only the loose pattern applies, and it is matched against the raw input
/// without trimming; normalization to trimmed lowercase happens afterwards.
///
/// # Errors
///
/// Returns the first failing rule's message.
pub fn subscriber_email(input: Option<&str>) -> Result<Email, ValidationError> {
    let raw = input.ok_or(ValidationError("Email is required"))?;
    if raw.is_empty() {
        return Err(ValidationError("Email is required"));
    }
    if !Email::matches_loose(raw) {
        return Err(ValidationError("Invalid email format"));
    }
    Ok(Email::parse_loose(raw)?)
}

/// Validate an optional phone number.
///
/// Formatting characters (whitespace, `-`, `(`, `)`, `+`) are stripped
/// before checking; what remains must be 7-15 digits. Returns the trimmed
/// original (with formatting), or `""` when absent.
///
/// # Errors
///
/// Returns the first failing rule's message.
pub fn phone(input: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let digits: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '+'))
        .collect();

    if !digits.chars().all(|c| c.is_ascii_digit()) || digits.is_empty() {
        return Err(ValidationError(
            "Phone number can only contain digits, spaces, hyphens, parentheses, and +",
        ));
    }
    if digits.len() < 7 {
        return Err(ValidationError("Phone number must be at least 7 digits"));
    }
    if digits.len() > 15 {
        return Err(ValidationError("Phone number must be less than 15 digits"));
    }

    Ok(trimmed.to_string())
}

/// Validate an optional comment: 10-5000 characters when present.
///
/// # Errors
///
/// Returns the first failing rule's message.
pub fn comment(input: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let length = trimmed.chars().count();
    if length < 10 {
        return Err(ValidationError("Comment must be at least 10 characters"));
    }
    if length > 5000 {
        return Err(ValidationError("Comment must be less than 5000 characters"));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional artist/band name: at most 200 characters.
///
/// # Errors
///
/// Returns the failing rule's message.
pub fn artist_name(input: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.chars().count() > 200 {
        return Err(ValidationError(
            "Artist/Band name must be less than 200 characters",
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional music profile blurb: at most 5000 characters.
///
/// # Errors
///
/// Returns the failing rule's message.
pub fn music_profile(input: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.chars().count() > 5000 {
        return Err(ValidationError(
            "Music profile must be less than 5000 characters",
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate the submitter role: must be exactly "business" or "artist".
///
/// # Errors
///
/// Returns the failing rule's message.
pub fn submitter_role(input: Option<&str>) -> Result<SubmitterRole, ValidationError> {
    match input {
        None | Some("") => Err(ValidationError("Role is required")),
        Some("business") => Ok(SubmitterRole::Business),
        Some("artist") => Ok(SubmitterRole::Artist),
        Some(_) => Err(ValidationError(
            "Role must be either 'business' or 'artist'",
        )),
    }
}
