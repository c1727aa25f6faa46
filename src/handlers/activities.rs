// src/handlers/activities.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{ApiJson, ApiPath},
    },
    config::AppState,
    models::activity::{Activity, NewActivity},
};

// POST /api/activities
#[utoipa::path(
    post,
    path = "/api/activities",
    tag = "Activities",
    request_body = NewActivity,
    responses(
        (status = 201, description = "Atividade registrada", body = Activity),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Lead ou usuário inexistente")
    )
)]
pub async fn create_activity(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<NewActivity>,
) -> Result<impl IntoResponse, AppError> {
    payload.check()?;

    let activity = app_state
        .activity_repo
        .create_activity(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(activity)))
}

// POST /api/activities/{id}/complete
#[utoipa::path(
    post,
    path = "/api/activities/{id}/complete",
    tag = "Activities",
    params(("id" = i32, Path, description = "ID da atividade")),
    responses(
        (status = 200, description = "Atividade concluída", body = Activity),
        (status = 404, description = "Atividade não encontrada")
    )
)]
pub async fn complete_activity(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let activity = app_state
        .activity_repo
        .complete(&app_state.db_pool, id)
        .await?
        .ok_or(AppError::NotFound("Atividade"))?;
    Ok(Json(activity))
}
