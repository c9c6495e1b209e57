//! HTTP response handling for errors

use super::types::BoardError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Message returned for every fault that is not the caller's
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

impl ResponseError for BoardError {
    fn status_code(&self) -> StatusCode {
        match self {
            BoardError::AuthMissing
            | BoardError::AuthInvalid
            | BoardError::Forbidden
            | BoardError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            BoardError::Validation { .. } | BoardError::Conflict { .. } => StatusCode::BAD_REQUEST,
            BoardError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = if self.is_internal() {
            error!(error = %self, "Request failed with an internal error");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { message })
    }
}

/// Error body shared by every failing route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}
