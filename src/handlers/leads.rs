// src/handlers/leads.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{ApiJson, ApiPath},
    },
    config::AppState,
    models::{
        activity::Activity,
        lead::{Lead, NewLead, UpdateLeadStatus},
        message::Message,
        survey::Survey,
    },
};

// =============================================================================
//  ÁREA 1: LEADS
// =============================================================================

// GET /api/leads
#[utoipa::path(
    get,
    path = "/api/leads",
    tag = "Leads",
    responses((status = 200, description = "Lista de leads, mais recentes primeiro", body = Vec<Lead>))
)]
pub async fn list_leads(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let leads = app_state.lead_repo.list().await?;
    Ok(Json(leads))
}

// POST /api/leads
#[utoipa::path(
    post,
    path = "/api/leads",
    tag = "Leads",
    request_body = NewLead,
    responses(
        (status = 201, description = "Lead criado", body = Lead),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Usuário responsável inexistente")
    )
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<NewLead>,
) -> Result<impl IntoResponse, AppError> {
    payload.check()?;

    let lead = app_state.lead_repo.create_lead(&app_state.db_pool, &payload).await?;

    tracing::info!(lead_id = lead.id, "📇 Lead criado");
    Ok((StatusCode::CREATED, Json(lead)))
}

// GET /api/leads/{id}
#[utoipa::path(
    get,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = i32, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Lead encontrado", body = Lead),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn get_lead(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state
        .lead_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Lead"))?;
    Ok(Json(lead))
}

// PATCH /api/leads/{id}/status
#[utoipa::path(
    patch,
    path = "/api/leads/{id}/status",
    tag = "Leads",
    params(("id" = i32, Path, description = "ID do lead")),
    request_body = UpdateLeadStatus,
    responses(
        (status = 200, description = "Etapa atualizada", body = Lead),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn update_lead_status(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateLeadStatus>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state
        .lead_repo
        .update_status(&app_state.db_pool, id, payload.status)
        .await?
        .ok_or(AppError::NotFound("Lead"))?;

    if lead.status.is_final() {
        tracing::info!(lead_id = lead.id, status = ?lead.status, "🏁 Lead saiu do funil");
    }
    Ok(Json(lead))
}

// DELETE /api/leads/{id}
#[utoipa::path(
    delete,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = i32, Path, description = "ID do lead")),
    responses(
        (status = 204, description = "Lead e dependentes removidos"),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn delete_lead(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !app_state.lead_repo.delete_lead(&app_state.db_pool, id).await? {
        return Err(AppError::NotFound("Lead"));
    }

    tracing::info!(lead_id = id, "🗑️ Lead removido");
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 2: HISTÓRICO DO LEAD
// =============================================================================

async fn ensure_lead(app_state: &AppState, id: i32) -> Result<(), AppError> {
    match app_state.lead_repo.find_by_id(id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound("Lead")),
    }
}

// GET /api/leads/{id}/activities
#[utoipa::path(
    get,
    path = "/api/leads/{id}/activities",
    tag = "Leads",
    params(("id" = i32, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Atividades do lead", body = Vec<Activity>),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn list_lead_activities(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    ensure_lead(&app_state, id).await?;
    Ok(Json(app_state.activity_repo.list_by_lead(id).await?))
}

// GET /api/leads/{id}/messages
#[utoipa::path(
    get,
    path = "/api/leads/{id}/messages",
    tag = "Leads",
    params(("id" = i32, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Conversa com o lead", body = Vec<Message>),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn list_lead_messages(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    ensure_lead(&app_state, id).await?;
    Ok(Json(app_state.message_repo.list_by_lead(id).await?))
}

// GET /api/leads/{id}/surveys
#[utoipa::path(
    get,
    path = "/api/leads/{id}/surveys",
    tag = "Leads",
    params(("id" = i32, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Pesquisas enviadas ao lead", body = Vec<Survey>),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn list_lead_surveys(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    ensure_lead(&app_state, id).await?;
    Ok(Json(app_state.survey_repo.list_by_lead(id).await?))
}
