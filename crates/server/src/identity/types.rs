//! Wire types for the GoTrue-compatible identity backend.

use serde::{Deserialize, Serialize};

/// An authenticated principal as reported by the identity backend.
///
/// Only the fields the storefront consumes are modeled; `user_metadata`
/// carries the optional display name set at signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub user_metadata: serde_json::Value,
}

impl AuthUser {
    /// Display name: metadata name if set, otherwise the email local part.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = self.user_metadata.get("name").and_then(|v| v.as_str()) {
            return Some(name.to_owned());
        }
        self.email
            .as_deref()
            .map(|email| email.split('@').next().unwrap_or(email).to_owned())
    }
}

/// A bearer-token session issued by the identity backend.
///
/// Field names follow the backend's snake_case wire format, which is what the
/// browser client stores verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Result of a signup call.
///
/// When the backend requires email confirmation it issues no session; the
/// caller must tell the user to confirm before logging in.
#[derive(Debug, Clone)]
pub struct SignupOutcome {
    pub user: AuthUser,
    pub session: Option<AuthSession>,
    pub requires_confirmation: bool,
}
