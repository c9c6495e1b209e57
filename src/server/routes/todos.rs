//! Todo endpoints

use super::MessageResponse;
use crate::auth::Principal;
use crate::server::state::AppState;
use crate::utils::error::BoardError;
use actix_web::{HttpResponse, web};
use serde_json::Value;

/// Configure todo routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/todo", web::post().to(create_todo))
        .route("/todos", web::get().to(list_todos))
        .route("/todo/{id}", web::get().to(get_todo))
        .route("/todo/{id}", web::put().to(update_todo))
        .route("/todo/{id}", web::delete().to(delete_todo))
        .route("/todo/{id}/complete", web::patch().to(complete_todo));
}

pub async fn create_todo(
    state: web::Data<AppState>,
    principal: Principal,
    body: web::Json<Value>,
) -> Result<HttpResponse, BoardError> {
    let todo = state.todos.create(&principal, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(todo))
}

pub async fn list_todos(state: web::Data<AppState>) -> Result<HttpResponse, BoardError> {
    Ok(HttpResponse::Ok().json(state.todos.list().await?))
}

pub async fn get_todo(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, BoardError> {
    Ok(HttpResponse::Ok().json(state.todos.get(&path).await?))
}

pub async fn update_todo(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, BoardError> {
    let todo = state
        .todos
        .update(&principal, &path, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(todo))
}

pub async fn complete_todo(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<String>,
) -> Result<HttpResponse, BoardError> {
    Ok(HttpResponse::Ok().json(state.todos.complete(&principal, &path).await?))
}

pub async fn delete_todo(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<String>,
) -> Result<HttpResponse, BoardError> {
    state.todos.delete(&principal, &path).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Todo deleted")))
}
