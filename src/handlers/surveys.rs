// src/handlers/surveys.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{ApiJson, ApiPath},
    },
    config::AppState,
    models::survey::{CompleteSurvey, NewSurvey, Survey},
};

// POST /api/surveys
#[utoipa::path(
    post,
    path = "/api/surveys",
    tag = "Surveys",
    request_body = NewSurvey,
    responses(
        (status = 201, description = "Pesquisa enviada", body = Survey),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Lead inexistente")
    )
)]
pub async fn create_survey(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<NewSurvey>,
) -> Result<impl IntoResponse, AppError> {
    payload.check()?;

    let survey = app_state
        .survey_repo
        .create_survey(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(survey)))
}

// POST /api/surveys/{id}/complete
#[utoipa::path(
    post,
    path = "/api/surveys/{id}/complete",
    tag = "Surveys",
    params(("id" = i32, Path, description = "ID da pesquisa")),
    request_body = CompleteSurvey,
    responses(
        (status = 200, description = "Respostas gravadas", body = Survey),
        (status = 400, description = "Respostas ausentes"),
        (status = 404, description = "Pesquisa não encontrada")
    )
)]
pub async fn complete_survey(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<CompleteSurvey>,
) -> Result<impl IntoResponse, AppError> {
    payload.check()?;

    let survey = app_state
        .survey_repo
        .complete(&app_state.db_pool, id, &payload.responses)
        .await?
        .ok_or(AppError::NotFound("Pesquisa"))?;
    Ok(Json(survey))
}
