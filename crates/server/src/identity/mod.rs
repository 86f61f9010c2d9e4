//! Identity backend client.
//!
//! The identity backend is an external, GoTrue-compatible authentication
//! service (Supabase Auth in the original deployment). It is treated as
//! opaque: this module is a stateless passthrough that issues, verifies, and
//! revokes bearer tokens. The server holds no session state of its own; every
//! request re-validates its token against the backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use luxe_server::identity::IdentityClient;
//!
//! let client = IdentityClient::new(&config.identity);
//!
//! // Log in and keep the bearer token client-side
//! let (user, session) = client.sign_in("a@example.com", "hunter22").await?;
//!
//! // Later, re-validate the token on an incoming request
//! let user = client.verify_token(Some(&session.access_token)).await?;
//! ```

mod client;
mod types;

pub use client::IdentityClient;
pub use types::{AuthSession, AuthUser, SignupOutcome};

use thiserror::Error;

/// Errors from identity backend operations.
///
/// A backend failure is never treated as an authenticated result: transport
/// errors and rejections both surface to the caller as errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No bearer token was supplied with the request.
    #[error("No authentication token provided")]
    MissingToken,

    /// The backend rejected the token.
    #[error("Invalid or expired token")]
    InvalidOrExpired,

    /// The call to the backend itself failed (network error or 5xx).
    #[error("Identity backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The backend rejected the operation; message surfaced verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The backend returned a body we could not interpret.
    #[error("Unexpected identity backend response: {0}")]
    UnexpectedResponse(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        Self::BackendUnavailable(err.to_string())
    }
}
