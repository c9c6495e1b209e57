//! User models for the board service
//!
//! This module defines account records and the login exchange.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Email address (unique)
    pub email: String,
    /// Password hash
    #[serde(skip)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
    /// Registration timestamp
    pub date: DateTime<Utc>,
}

/// A validated registration request
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Login request body
///
/// Missing fields deserialize as empty strings so that a partial body is an
/// ordinary credential mismatch rather than a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
