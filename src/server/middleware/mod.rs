//! HTTP middleware implementations
//!
//! Authentication runs as middleware so that every protected route rejects
//! a missing or invalid credential before any body parsing, validation or
//! record lookup happens.

mod auth;
mod helpers;


pub use auth::{AuthMiddleware, AuthMiddlewareService};
pub use helpers::{extract_auth_method, is_public_route};
