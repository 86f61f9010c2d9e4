//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; every error renders a JSON `{"error": message}`
//! body, which is what the browser client displays. No handler retries.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::identity::AuthError;
use crate::store::OrderError;

/// Application-level error type for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request was missing or had malformed fields.
    #[error("{0}")]
    Validation(String),

    /// Identity backend operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order store operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(err) => match err {
                AuthError::MissingToken | AuthError::InvalidOrExpired => StatusCode::UNAUTHORIZED,
                AuthError::BackendUnavailable(_) => StatusCode::BAD_GATEWAY,
                AuthError::Rejected(_) => StatusCode::BAD_REQUEST,
                AuthError::UnexpectedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Order(err) => match err {
                OrderError::EmptyCart => StatusCode::BAD_REQUEST,
                OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal details are not exposed.
    fn message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Unauthorized(msg) => msg.clone(),
            // Backend rejection messages are surfaced verbatim, per the
            // original contract.
            Self::Auth(err) => match err {
                AuthError::UnexpectedResponse(_) => "Authentication failed".to_string(),
                other => other.to_string(),
            },
            Self::Order(err) => err.to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side failures to Sentry
        if matches!(
            self,
            Self::Internal(_)
                | Self::Auth(AuthError::BackendUnavailable(_) | AuthError::UnexpectedResponse(_))
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = Json(json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_core::OrderId;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("Email and password are required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Auth(AuthError::MissingToken).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Auth(AuthError::InvalidOrExpired).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Auth(AuthError::Rejected("User already registered".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Order(OrderError::EmptyCart).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Order(OrderError::NotFound(OrderId::new("ORD-0-0"))).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let msg = AppError::Internal("db password leaked".into()).message();
        assert_eq!(msg, "Internal server error");
    }

    #[test]
    fn test_backend_rejection_message_is_verbatim() {
        let msg = AppError::Auth(AuthError::Rejected("Invalid login credentials".into())).message();
        assert_eq!(msg, "Invalid login credentials");
    }

    #[test]
    fn test_error_body_is_json_error_object() {
        let response = AppError::Order(OrderError::EmptyCart).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("application/json"));
    }
}
