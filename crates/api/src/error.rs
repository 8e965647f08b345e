//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures unexpected errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; response bodies are always `{"error": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use badinvstmnt_core::order::OrderError;
use badinvstmnt_core::validate::ValidationError;

use crate::firestore::FirestoreError;

/// Application-level error type for the site API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-supplied data failed a field rule. The message is surfaced
    /// verbatim and never logged as an error.
    #[error("{0}")]
    Validation(String),

    /// Requested entity does not exist. The message is the full client-
    /// facing string (e.g., "Product not found").
    #[error("{0}")]
    NotFound(String),

    /// Malformed request outside field validation (e.g., missing query
    /// parameter).
    #[error("{0}")]
    BadRequest(String),

    /// The document store call failed. Clients get the route's generic
    /// message; the source error is logged and captured.
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: FirestoreError,
    },
}

impl AppError {
    /// Wrap a store failure with the generic message this route shows.
    pub const fn upstream(message: &'static str, source: FirestoreError) -> Self {
        Self::Upstream { message, source }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.message().to_string())
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture upstream failures to Sentry; validation noise stays out.
        if let Self::Upstream { source, .. } = &self {
            let event_id = sentry::capture_error(source);
            tracing::error!(
                error = %source,
                sentry_event_id = %event_id,
                "Document store request failed"
            );
        }

        let status = match &self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Never leak internal detail: Upstream displays only its generic
        // per-route message.
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_of(AppError::Validation("Name is required".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::NotFound("Product not found".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::BadRequest("User ID is required".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::upstream(
                "Failed to fetch products. Please try again.",
                FirestoreError::NotFound("x".to_string()),
            )),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_hides_source_detail() {
        let err = AppError::upstream(
            "Failed to create order. Please try again.",
            FirestoreError::Status {
                status: 403,
                message: "Missing or insufficient permissions.".to_string(),
            },
        );

        assert_eq!(err.to_string(), "Failed to create order. Please try again.");
    }

    #[test]
    fn test_validation_conversion_keeps_message() {
        let err: AppError = ValidationError("Name is required").into();
        assert_eq!(err.to_string(), "Name is required");

        let err: AppError = OrderError::InvalidTotal.into();
        assert_eq!(err.to_string(), "Valid order total is required");
    }
}
