//! Error types for the board service

use crate::core::models::ResourceKind;
use thiserror::Error;

/// Result type alias for the board service
pub type Result<T> = std::result::Result<T, BoardError>;

/// Main error type for the board service
#[derive(Error, Debug)]
pub enum BoardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JWT encoding/decoding errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Password hashing errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// No bearer token on a protected route
    #[error("No token, authorization denied")]
    AuthMissing,

    /// Bad signature, malformed payload or a principal that no longer exists
    #[error("Token is not valid")]
    AuthInvalid,

    /// Request body rejected by a validator
    #[error("{message}")]
    Validation { field: String, message: String },

    /// Resource (or its parent) does not exist
    #[error("{0} not found")]
    NotFound(ResourceKind),

    /// Principal does not own the target resource
    #[error("Unauthorized")]
    Forbidden,

    /// Registration with an email that is already taken
    #[error("User already exists")]
    Conflict { email: String },

    /// Login with an unknown email or a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
