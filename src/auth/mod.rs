//! Authentication and authorization
//!
//! Request flow: the bearer token is verified by [`JwtHandler`], its subject
//! is resolved to a live account by [`PrincipalResolver`], and mutating
//! handlers consult [`guard`] before touching a record.

pub mod guard;
pub mod jwt;
pub mod password;
pub mod principal;

pub use guard::{Decision, Ownable, authorize, ensure_owner};
pub use jwt::JwtHandler;
pub use principal::{AccountDirectory, Principal, PrincipalResolver};

use crate::config::AuthConfig;
use crate::core::models::User;
use crate::utils::error::{BoardError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Main authentication system
#[derive(Clone)]
pub struct AuthSystem {
    /// JWT handler
    jwt: Arc<JwtHandler>,
    /// Maps token subjects to accounts
    resolver: PrincipalResolver,
}

/// Credential presented with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// Bearer token from the `Authorization` header
    Bearer(String),
    /// No usable credential
    None,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig, directory: Arc<dyn AccountDirectory>) -> Result<Self> {
        info!("Initializing authentication system");

        let jwt = Arc::new(JwtHandler::new(config)?);
        let resolver = PrincipalResolver::new(directory);

        Ok(Self { jwt, resolver })
    }

    /// Mint a token for an account that has just proven its password
    pub fn issue_token(&self, user: &User) -> Result<String> {
        self.jwt.issue(&user.id.to_string(), &user.email)
    }

    /// Authenticate a request
    ///
    /// No credential is `AuthMissing`; a bad token or a vanished account is
    /// `AuthInvalid`; a storage failure propagates as-is.
    pub async fn authenticate(&self, method: AuthMethod) -> Result<Principal> {
        let token = match method {
            AuthMethod::Bearer(token) => token,
            AuthMethod::None => return Err(BoardError::AuthMissing),
        };

        let claims = self.jwt.verify(&token)?;
        let principal = self
            .resolver
            .resolve(&claims.id)
            .await?
            .ok_or(BoardError::AuthInvalid)?;

        debug!("Authenticated user {} <{}>", principal.id(), principal.email());
        Ok(principal)
    }
}
