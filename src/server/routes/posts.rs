//! Post endpoints

use super::MessageResponse;
use crate::auth::Principal;
use crate::server::state::AppState;
use crate::utils::error::BoardError;
use actix_web::{HttpResponse, web};
use serde_json::Value;

/// Configure post routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts", web::post().to(create_post))
        .route("/posts", web::get().to(list_posts))
        .route("/post/{id}", web::get().to(get_post))
        .route("/post/{id}", web::put().to(update_post))
        .route("/post/{id}", web::delete().to(delete_post));
}

pub async fn create_post(
    state: web::Data<AppState>,
    principal: Principal,
    body: web::Json<Value>,
) -> Result<HttpResponse, BoardError> {
    let post = state.posts.create(&principal, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(post))
}

pub async fn list_posts(state: web::Data<AppState>) -> Result<HttpResponse, BoardError> {
    Ok(HttpResponse::Ok().json(state.posts.list().await?))
}

pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, BoardError> {
    Ok(HttpResponse::Ok().json(state.posts.get(&path).await?))
}

pub async fn update_post(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, BoardError> {
    let post = state
        .posts
        .update(&principal, &path, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

pub async fn delete_post(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<String>,
) -> Result<HttpResponse, BoardError> {
    state.posts.delete(&principal, &path).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted")))
}
