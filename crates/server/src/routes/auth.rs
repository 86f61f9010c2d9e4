//! Authentication route handlers.
//!
//! Each handler is a thin proxy to the corresponding identity backend call.
//! The server issues no credentials of its own; the browser client keeps the
//! bearer token in client-local storage and sends it on every request.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::identity::{AuthError, AuthSession, AuthUser};
use crate::middleware::{BearerToken, RequireUser};
use crate::state::AppState;

// =============================================================================
// Request Types
// =============================================================================

/// Signup request body.
///
/// Fields are optional so that missing input yields a 400 with a message,
/// not a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// =============================================================================
// Response Types
// =============================================================================

/// Signup response: the session is null until email confirmation completes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user: AuthUser,
    pub session: Option<AuthSession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_confirmation: Option<bool>,
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: AuthUser,
    pub session: AuthSession,
}

/// Logout response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Current-user response.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: AuthUser,
}

/// OAuth redirect response.
#[derive(Debug, Serialize)]
pub struct OAuthUrlResponse {
    pub url: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Pull a required credential field out of the request, rejecting blanks.
fn required(field: Option<String>) -> Result<String> {
    field
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Email and password are required".to_string()))
}

/// `POST /auth/signup` - Register a new user with email and password.
#[instrument(skip(state, request))]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>> {
    let email = required(request.email)?;
    let password = required(request.password)?;

    let outcome = state
        .identity()
        .sign_up(&email, &password, request.name.as_deref())
        .await?;

    let response = if outcome.session.is_some() {
        SignupResponse {
            message: "Signup successful".to_string(),
            user: outcome.user,
            session: outcome.session,
            requires_confirmation: None,
        }
    } else {
        SignupResponse {
            message: "Signup successful. Please check your email to confirm your account."
                .to_string(),
            user: outcome.user,
            session: None,
            requires_confirmation: Some(true),
        }
    };

    Ok(Json(response))
}

/// `POST /auth/login` - Login with email and password.
///
/// A backend rejection (bad credentials, unconfirmed email) comes back as
/// 401 with the backend's message verbatim.
#[instrument(skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let email = required(request.email)?;
    let password = required(request.password)?;

    let (user, session) = state
        .identity()
        .sign_in(&email, &password)
        .await
        .map_err(|err| match err {
            AuthError::Rejected(message) => AppError::Unauthorized(message),
            other => AppError::Auth(other),
        })?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user,
        session,
    }))
}

/// `POST /auth/logout` - Revoke the current bearer token.
///
/// Always responds 200: a failed backend revocation is logged, not surfaced,
/// since the client discards its local token either way.
#[instrument(skip(state, token))]
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Json<MessageResponse> {
    if let Some(token) = token {
        if let Err(e) = state.identity().sign_out(&token).await {
            tracing::warn!("Logout revocation failed: {e}");
        }
    }

    Json(MessageResponse {
        message: "Logout successful".to_string(),
    })
}

/// `GET /auth/user` - Current user information.
#[instrument(skip(user))]
pub async fn current_user(RequireUser(user): RequireUser) -> Json<UserResponse> {
    Json(UserResponse { user })
}

/// `POST /auth/google` - Initiate Google OAuth login.
///
/// Returns the backend's authorization URL; the browser navigates there and
/// comes back to the storefront with a token in the URL fragment.
#[instrument(skip(state))]
pub async fn google(State(state): State<AppState>) -> Json<OAuthUrlResponse> {
    let url = state.identity().oauth_url("google");
    tracing::info!("Google OAuth URL generated");
    Json(OAuthUrlResponse { url })
}
