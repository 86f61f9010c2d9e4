//! HTTP client for the identity backend.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::config::IdentityConfig;

use super::types::{AuthSession, AuthUser, SignupOutcome};
use super::AuthError;

/// Client for the GoTrue-compatible identity backend.
///
/// Cheaply cloneable via `Arc`; holds a shared `reqwest::Client`.
#[derive(Clone)]
pub struct IdentityClient {
    inner: Arc<IdentityClientInner>,
}

struct IdentityClientInner {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    redirect_url: String,
}

/// Error body shapes the backend is known to produce.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl BackendErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

impl IdentityClient {
    /// Create a new identity backend client.
    #[must_use]
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            inner: Arc::new(IdentityClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                api_key: config.api_key.expose_secret().to_string(),
                redirect_url: config.redirect_url.clone(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.inner.base_url)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Account Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a new user with email and password.
    ///
    /// The display name defaults to the email local part when not supplied,
    /// matching the storefront client's expectation.
    ///
    /// # Errors
    ///
    /// `AuthError::Rejected` with the backend's message verbatim when the
    /// signup is refused; `AuthError::BackendUnavailable` on transport
    /// failure.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<SignupOutcome, AuthError> {
        let display_name = name.map_or_else(
            || email.split('@').next().unwrap_or(email).to_owned(),
            ToOwned::to_owned,
        );

        let response = self
            .inner
            .client
            .post(self.endpoint("signup"))
            .query(&[("redirect_to", self.inner.redirect_url.as_str())])
            .header("apikey", &self.inner.api_key)
            .json(&json!({
                "email": email,
                "password": password,
                "data": { "name": display_name },
            }))
            .send()
            .await?;

        let body = Self::read_rejecting_errors(response).await?;

        // Auto-confirm deployments return a session with the user embedded;
        // confirmation-required deployments return the bare user object.
        if body.get("access_token").is_some() {
            let user = parse_field(&body, "user")?;
            let session: AuthSession = parse_value(body)?;
            Ok(SignupOutcome {
                user,
                session: Some(session),
                requires_confirmation: false,
            })
        } else {
            let user: AuthUser = parse_value(body)?;
            Ok(SignupOutcome {
                user,
                session: None,
                requires_confirmation: true,
            })
        }
    }

    /// Log in with email and password, returning the principal and a session.
    ///
    /// # Errors
    ///
    /// `AuthError::Rejected` with the backend's message verbatim on bad
    /// credentials; `AuthError::BackendUnavailable` on transport failure.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(AuthUser, AuthSession), AuthError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.inner.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let body = Self::read_rejecting_errors(response).await?;
        let user = parse_field(&body, "user")?;
        let session: AuthSession = parse_value(body)?;
        Ok((user, session))
    }

    /// Revoke a bearer token.
    ///
    /// # Errors
    ///
    /// `AuthError::Rejected` when the backend refuses;
    /// `AuthError::BackendUnavailable` on transport failure.
    pub async fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("logout"))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(token)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Rejected(
                Self::error_message(response, "Logout failed").await,
            ))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Token Verification
    // ─────────────────────────────────────────────────────────────────────────

    /// Verify a bearer token, returning the authenticated principal.
    ///
    /// # Errors
    ///
    /// `AuthError::MissingToken` when no token was supplied,
    /// `AuthError::InvalidOrExpired` when the backend rejects it, and
    /// `AuthError::BackendUnavailable` when the lookup call itself fails.
    /// Backend failure is never treated as an authenticated result.
    pub async fn verify_token(&self, token: Option<&str>) -> Result<AuthUser, AuthError> {
        let token = token.ok_or(AuthError::MissingToken)?;

        let response = self
            .inner
            .client
            .get(self.endpoint("user"))
            .header("apikey", &self.inner.api_key)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<AuthUser>().await?)
        } else if status.is_server_error() {
            // A broken backend must not look like a bad token
            Err(AuthError::BackendUnavailable(format!(
                "user lookup returned {status}"
            )))
        } else {
            Err(AuthError::InvalidOrExpired)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // OAuth
    // ─────────────────────────────────────────────────────────────────────────

    /// Build the OAuth authorization URL for the given provider.
    ///
    /// The browser is redirected here to begin the provider's consent flow;
    /// the backend redirects back to the configured storefront URL with the
    /// access token in the fragment.
    #[must_use]
    pub fn oauth_url(&self, provider: &str) -> String {
        format!(
            "{}?provider={}&redirect_to={}&access_type=offline&prompt=consent",
            self.endpoint("authorize"),
            urlencoding::encode(provider),
            urlencoding::encode(&self.inner.redirect_url),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Health
    // ─────────────────────────────────────────────────────────────────────────

    /// Probe the backend's health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), AuthError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("health"))
            .header("apikey", &self.inner.api_key)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Rejected(format!(
                "Identity backend unhealthy: {}",
                response.status()
            )))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Response Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Read a JSON body, turning non-2xx statuses into `Rejected` errors with
    /// the backend's own message.
    async fn read_rejecting_errors(
        response: reqwest::Response,
    ) -> Result<serde_json::Value, AuthError> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(AuthError::Rejected(
                Self::error_message(response, "Identity backend request failed").await,
            ))
        }
    }

    /// Best-effort extraction of the backend's error message.
    async fn error_message(response: reqwest::Response, fallback: &str) -> String {
        let text = response.text().await.unwrap_or_default();
        serde_json::from_str::<BackendErrorBody>(&text)
            .ok()
            .and_then(BackendErrorBody::into_message)
            .unwrap_or_else(|| {
                if text.is_empty() {
                    fallback.to_owned()
                } else {
                    text
                }
            })
    }
}

fn parse_value<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T, AuthError> {
    serde_json::from_value(value).map_err(|e| AuthError::UnexpectedResponse(e.to_string()))
}

fn parse_field<T: serde::de::DeserializeOwned>(
    value: &serde_json::Value,
    field: &str,
) -> Result<T, AuthError> {
    let inner = value
        .get(field)
        .ok_or_else(|| AuthError::UnexpectedResponse(format!("missing `{field}` field")))?;
    serde_json::from_value(inner.clone()).map_err(|e| AuthError::UnexpectedResponse(e.to_string()))
}
