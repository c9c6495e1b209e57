//! Helper functions for creating specific error types

use super::types::BoardError;
use crate::core::models::ResourceKind;

impl BoardError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn validation<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(kind: ResourceKind) -> Self {
        Self::NotFound(kind)
    }

    pub fn conflict<S: Into<String>>(email: S) -> Self {
        Self::Conflict {
            email: email.into(),
        }
    }

    /// Whether this error is a fault of the service rather than of the caller.
    ///
    /// Internal errors are logged server-side and rendered as a generic 500.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::Database(_)
                | Self::Serialization(_)
                | Self::Yaml(_)
                | Self::Io(_)
                | Self::Jwt(_)
                | Self::Crypto(_)
                | Self::Internal(_)
        )
    }
}
