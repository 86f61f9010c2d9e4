//! Shared helpers for HTTP-level tests.
//!
//! Builds the real router with a throwaway configuration and drives it
//! in-process. The identity backend address is unroutable, so tests cover
//! the payment flow and the auth paths that fail before any backend call.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use tower::ServiceExt;

use luxe_server::config::{IdentityConfig, ServerConfig};
use luxe_server::state::AppState;

/// A configuration that never reads the environment.
///
/// # Panics
///
/// Panics if the loopback literal fails to parse, which cannot happen.
#[must_use]
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().expect("loopback literal"),
        port: 0,
        identity: IdentityConfig {
            // TEST-NET-1: guaranteed unroutable, so backend calls fail fast
            base_url: "http://192.0.2.1:9".to_string(),
            api_key: SecretString::from("test-key"),
            redirect_url: "http://localhost:3000/index.html".to_string(),
        },
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Build the application router with a fresh, empty order store.
#[must_use]
pub fn test_app() -> Router {
    luxe_server::app(AppState::new(test_config()))
}

/// POST a JSON body and return the status plus parsed JSON response.
///
/// # Panics
///
/// Panics if the request cannot be built or the response is not JSON.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    send(app, request).await
}

/// GET a URI and return the status plus parsed JSON response.
///
/// # Panics
///
/// Panics if the request cannot be built or the response is not JSON.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, json)
}
