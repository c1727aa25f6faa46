// src/handlers/users.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{error::AppError, extract::ApiJson},
    config::AppState,
    models::user::{NewUser, User},
};

// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses((status = 200, description = "Lista de usuários", body = Vec<User>))
)]
pub async fn list_users(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = app_state.user_repo.list().await?;
    Ok(Json(users))
}

// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "Usuário criado", body = User),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Usuário já existe")
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.auth_service.register_user(&payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
