//! Utility modules for the board service
//!
//! - **error**: Error taxonomy and its HTTP rendering
//! - **logging**: Tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging & monitoring

pub use error::{BoardError, Result};
