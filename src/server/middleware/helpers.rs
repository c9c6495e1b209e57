//! Helper functions for middleware

use crate::auth::{AuthMethod, JwtHandler};
use actix_web::http::Method;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};

/// Extract authentication method from headers
pub fn extract_auth_method(headers: &HeaderMap) -> AuthMethod {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(JwtHandler::extract_token_from_header)
        .map(|token| AuthMethod::Bearer(token.to_string()))
        .unwrap_or(AuthMethod::None)
}

/// Check if a route is public (doesn't require authentication)
///
/// Registration, login and the health check are public; so is any CORS
/// preflight, which never carries credentials.
pub fn is_public_route(method: &Method, path: &str) -> bool {
    if method == Method::OPTIONS {
        return true;
    }

    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };

    matches!(
        (method.as_str(), path),
        ("GET", "/health") | ("POST", "/user") | ("POST", "/login")
    )
}
