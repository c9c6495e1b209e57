//! JWT token handling
//!
//! This module provides bearer token creation and verification. Tokens are
//! HS256 over `{id, email, iat}` and carry no expiry.

mod handler;
pub mod types;


pub use types::{Claims, JwtHandler};
