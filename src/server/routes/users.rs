//! Registration, login and account endpoints

use super::MessageResponse;
use crate::auth::Principal;
use crate::core::models::{LoginRequest, LoginResponse};
use crate::server::state::AppState;
use crate::utils::error::BoardError;
use actix_web::{HttpResponse, web};
use serde_json::Value;

/// Configure account routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/user", web::post().to(register))
        .route("/login", web::post().to(login))
        .route("/users", web::get().to(list_users))
        .route("/user/{id}", web::get().to(get_user))
        .route("/user/{id}", web::delete().to(delete_user));
}

/// `POST /user`
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, BoardError> {
    let user = state.users.register(&body).await?;
    Ok(HttpResponse::Created().json(user))
}

/// `POST /login`
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, BoardError> {
    let token = state.users.login(&state.auth, &request).await?;
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

/// `GET /users`
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, BoardError> {
    Ok(HttpResponse::Ok().json(state.users.list().await?))
}

/// `GET /user/{id}`
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, BoardError> {
    Ok(HttpResponse::Ok().json(state.users.get(&path).await?))
}

/// `DELETE /user/{id}`, self only
pub async fn delete_user(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<String>,
) -> Result<HttpResponse, BoardError> {
    state.users.delete(&principal, &path).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted")))
}
