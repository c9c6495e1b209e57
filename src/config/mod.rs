//! Configuration management for the board service
//!
//! Configuration is read from an optional YAML file and then overlaid with
//! environment variables, so a bare `JWT_SECRET` + `DATABASE_URL` environment
//! is enough to start the server.

pub mod models;

pub use models::*;

use crate::utils::error::{BoardError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the board service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from file, without environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BoardError::Config(format!("Failed to read config file: {}", e)))?;

        let app: AppConfig = serde_yaml::from_str(&content)
            .map_err(|e| BoardError::Config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration file parsed successfully");
        Ok(Self { app })
    }

    /// Load the effective configuration: file (if any), then environment
    ///
    /// The result is not validated yet; call [`Config::validate`] once
    /// logging is up so its warnings are seen.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok()).await
    }

    /// Like [`Config::load`], reading overrides through `lookup`
    pub async fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };

        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Overlay values found through `lookup` (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.app.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.app.server.port = parse_var("PORT", &port)?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.app.storage.database.url = url;
        }
        if let Some(max) = lookup("DB_MAX_CONNECTIONS") {
            self.app.storage.database.max_connections = parse_var("DB_MAX_CONNECTIONS", &max)?;
        }
        if let Some(timeout) = lookup("DB_CONNECTION_TIMEOUT") {
            self.app.storage.database.connection_timeout =
                parse_var("DB_CONNECTION_TIMEOUT", &timeout)?;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.app.auth.jwt_secret = secret;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.app.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.app.auth
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.app
            .server
            .validate()
            .map_err(|e| BoardError::Config(format!("Server config error: {}", e)))?;

        self.app
            .server
            .cors
            .validate()
            .map_err(|e| BoardError::Config(format!("CORS config error: {}", e)))?;

        self.app
            .storage
            .database
            .validate()
            .map_err(|e| BoardError::Config(format!("Database config error: {}", e)))?;

        self.app
            .auth
            .validate()
            .map_err(|e| BoardError::Config(format!("Auth config error: {}", e)))?;

        models::auth::warn_insecure_config(&self.app.auth);

        debug!("Configuration validation completed");
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| BoardError::Config(format!("Invalid value for {}: {:?}", name, value)))
}
