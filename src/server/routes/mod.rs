//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by resource.

pub mod comments;
pub mod health;
pub mod posts;
pub mod todos;
pub mod users;

use actix_web::web;
use serde::{Deserialize, Serialize};

/// Body returned by delete routes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Configure every route of the board API
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .configure(users::configure_routes)
        .configure(todos::configure_routes)
        .configure(posts::configure_routes)
        .configure(comments::configure_routes);
}
