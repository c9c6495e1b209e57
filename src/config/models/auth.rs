//! Authentication configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Below this length the signing secret is accepted but flagged
const RECOMMENDED_SECRET_LEN: usize = 32;

/// Authentication configuration
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// HS256 signing secret; must be provided
    #[serde(default)]
    pub jwt_secret: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}

impl AuthConfig {
    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.trim().is_empty() {
            return Err("JWT secret is not set; provide JWT_SECRET or auth.jwt_secret".to_string());
        }
        Ok(())
    }
}

/// Warn about insecure configuration in development
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.jwt_secret.len() < RECOMMENDED_SECRET_LEN {
        warn!(
            "JWT secret is shorter than {} characters. Use a longer random secret before deploying to production.",
            RECOMMENDED_SECRET_LEN
        );
    }
}
