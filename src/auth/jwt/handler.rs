//! Core JWT handler implementation

use super::types::{Claims, JwtHandler};
use crate::config::AuthConfig;
use crate::utils::error::{BoardError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

impl JwtHandler {
    /// Create a new JWT handler
    pub fn new(config: &AuthConfig) -> Result<Self> {
        if config.jwt_secret.trim().is_empty() {
            return Err(BoardError::config("JWT secret is not set"));
        }
        let secret = config.jwt_secret.as_bytes();

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Issue a bearer token for a subject
    pub fn issue(&self, subject_id: &str, email: &str) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| BoardError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = Claims {
            id: subject_id.to_string(),
            email: email.to_string(),
            iat: Some(now),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(BoardError::Jwt)?;

        debug!("Issued token for user: {}", subject_id);
        Ok(token)
    }

    /// Verify and decode a token
    ///
    /// Any signature mismatch or malformed payload is `AuthInvalid`.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_aud = false;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            debug!("JWT verification failed: {}", e);
            BoardError::AuthInvalid
        })?;

        debug!("Token verified for user: {}", token_data.claims.id);
        Ok(token_data.claims)
    }

    /// Extract token from Authorization header
    ///
    /// The scheme must be `Bearer` (any case) followed by a non-empty token.
    pub fn extract_token_from_header(header_value: &str) -> Option<&str> {
        let (scheme, token) = header_value.trim().split_once(' ')?;
        let token = token.trim();
        if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
            Some(token)
        } else {
            None
        }
    }
}
