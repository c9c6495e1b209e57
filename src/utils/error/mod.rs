//! Error handling for the board service
//!
//! This module defines the error taxonomy used throughout the crate and how
//! each error is rendered at the HTTP boundary.

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{BoardError, Result};
