//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Health check endpoint handler
///
/// Always 200 so the check itself stays cheap; the body says whether storage
/// answered.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let storage = state.storage.health_check().await;
    let status = if storage.overall { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(json!({
        "status": status,
        "storage": storage,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
