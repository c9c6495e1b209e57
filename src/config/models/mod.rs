//! Configuration data models
//!
//! This module defines all configuration structures used by the board service.

#![allow(missing_docs)]

pub mod app;
pub mod auth;
pub mod logging;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use app::*;
pub use auth::*;
pub use logging::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_database_url() -> String {
    "sqlite://data/postboard.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_cors_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

pub fn default_cors_headers() -> Vec<String> {
    vec!["authorization".to_string(), "content-type".to_string()]
}

pub fn default_cors_max_age() -> u32 {
    3600
}

pub fn default_true() -> bool {
    true
}
