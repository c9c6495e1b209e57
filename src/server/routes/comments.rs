//! Comment endpoints
//!
//! Mutations answer 201 with the whole parent post.

use crate::auth::Principal;
use crate::server::state::AppState;
use crate::utils::error::BoardError;
use actix_web::{HttpResponse, web};
use serde_json::Value;

/// Configure comment routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/comments/{post_id}", web::post().to(create_comment))
        .route("/comments/{post_id}", web::get().to(list_comments))
        .route("/comments/{post_id}/{comment_id}", web::get().to(get_comment))
        .route(
            "/comments/{post_id}/{comment_id}",
            web::patch().to(update_comment),
        )
        .route(
            "/comments/{post_id}/{comment_id}",
            web::delete().to(delete_comment),
        );
}

pub async fn create_comment(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, BoardError> {
    let post = state
        .comments
        .create(&principal, &path, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(post))
}

pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, BoardError> {
    Ok(HttpResponse::Ok().json(state.comments.list(&path).await?))
}

pub async fn get_comment(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, BoardError> {
    let (post_id, comment_id) = path.into_inner();
    Ok(HttpResponse::Ok().json(state.comments.get(&post_id, &comment_id).await?))
}

pub async fn update_comment(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> Result<HttpResponse, BoardError> {
    let (post_id, comment_id) = path.into_inner();
    let post = state
        .comments
        .update(&principal, &post_id, &comment_id, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(post))
}

pub async fn delete_comment(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, BoardError> {
    let (post_id, comment_id) = path.into_inner();
    let post = state
        .comments
        .delete(&principal, &post_id, &comment_id)
        .await?;
    Ok(HttpResponse::Created().json(post))
}
