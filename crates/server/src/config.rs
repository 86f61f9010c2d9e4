//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `IDENTITY_BACKEND_URL` - Base URL of the identity backend (e.g., https://xyz.supabase.co)
//! - `IDENTITY_API_KEY` - Identity backend publishable API key
//!
//! ## Optional
//! - `LUXE_HOST` - Bind address (default: 127.0.0.1)
//! - `LUXE_PORT` - Listen port (default: 3000)
//! - `AUTH_REDIRECT_URL` - Where OAuth and email confirmation flows return to
//!   (default: http://localhost:3000/index.html)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Identity backend configuration
    pub identity: IdentityConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Identity backend configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct IdentityConfig {
    /// Base URL of the identity backend, without trailing slash
    pub base_url: String,
    /// Publishable API key sent with every request
    pub api_key: SecretString,
    /// Redirect target for OAuth and email confirmation flows
    pub redirect_url: String,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("redirect_url", &self.redirect_url)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("LUXE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUXE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LUXE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUXE_PORT".to_string(), e.to_string()))?;

        let identity = IdentityConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            identity,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl IdentityConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(get_required_env("IDENTITY_BACKEND_URL")?);
        let api_key = SecretString::from(get_required_env("IDENTITY_API_KEY")?);
        let redirect_url =
            get_env_or_default("AUTH_REDIRECT_URL", "http://localhost:3000/index.html");

        Ok(Self {
            base_url,
            api_key,
            redirect_url,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Strip a trailing slash so endpoint paths can be appended uniformly.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://xyz.supabase.co/".to_string()),
            "https://xyz.supabase.co"
        );
        assert_eq!(
            normalize_base_url("https://xyz.supabase.co".to_string()),
            "https://xyz.supabase.co"
        );
    }

    #[test]
    fn test_identity_config_debug_redacts_key() {
        let config = IdentityConfig {
            base_url: "https://xyz.supabase.co".to_string(),
            api_key: SecretString::from("sb_publishable_abc"),
            redirect_url: "http://localhost:3000/index.html".to_string(),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sb_publishable_abc"));
    }
}
