//! Authentication extractors.
//!
//! Requests prove their identity with an `Authorization: Bearer <token>`
//! header. The server holds no session state: `RequireUser` re-validates the
//! token against the identity backend on every request.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::AppError;
use crate::identity::AuthUser;
use crate::state::AppState;

/// Extractor for the raw bearer token, if one was supplied.
///
/// Does not validate the token; use [`RequireUser`] for that.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(BearerToken(token): BearerToken) -> impl IntoResponse {
///     match token {
///         Some(t) => format!("got a token of {} chars", t.len()),
///         None => "anonymous".to_string(),
///     }
/// }
/// ```
pub struct BearerToken(pub Option<String>);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(extract_bearer(parts)))
    }
}

/// Extractor that requires a valid bearer token.
///
/// Rejects with 401 when the token is missing or the identity backend
/// rejects it, and with 502 when the backend itself is unreachable. A
/// backend failure is never treated as authenticated.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireUser(user): RequireUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.id)
/// }
/// ```
pub struct RequireUser(pub AuthUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer(parts);
        let user = state.identity().verify_token(token.as_deref()).await?;
        Ok(Self(user))
    }
}

/// Pull the token out of the `Authorization: Bearer <token>` header.
fn extract_bearer(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/auth/user");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        let (parts, ()) = builder.body(()).expect("request").into_parts();
        parts
    }

    #[test]
    fn test_extract_bearer_token() {
        let parts = parts_with_auth(Some("Bearer abc123"));
        assert_eq!(extract_bearer(&parts).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_missing_header_yields_none() {
        let parts = parts_with_auth(None);
        assert_eq!(extract_bearer(&parts), None);
    }

    #[test]
    fn test_non_bearer_scheme_yields_none() {
        let parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));
        assert_eq!(extract_bearer(&parts), None);
    }

    #[test]
    fn test_empty_token_yields_none() {
        let parts = parts_with_auth(Some("Bearer "));
        assert_eq!(extract_bearer(&parts), None);
    }
}
