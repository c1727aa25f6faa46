// src/handlers/settings.rs

use axum::{extract::State, Json};

use crate::{
    common::{error::AppError, extract::ApiJson},
    config::AppState,
    models::{
        ai_settings::{AiSettings, NewAiSettings},
        status::{GeminiKeyStatus, OpenAiKeyStatus},
    },
};

// =============================================================================
//  ÁREA 1: CREDENCIAIS
// =============================================================================

// GET /api/settings/openai-key-status
#[utoipa::path(
    get,
    path = "/api/settings/openai-key-status",
    tag = "Settings",
    responses((status = 200, description = "Presença da chave da OpenAI", body = OpenAiKeyStatus))
)]
pub async fn openai_key_status(State(app_state): State<AppState>) -> Json<OpenAiKeyStatus> {
    Json(app_state.ai_keys.openai_status())
}

// GET /api/settings/gemini-key-status
#[utoipa::path(
    get,
    path = "/api/settings/gemini-key-status",
    tag = "Settings",
    responses((status = 200, description = "Presença e tipo da chave do Gemini", body = GeminiKeyStatus))
)]
pub async fn gemini_key_status(State(app_state): State<AppState>) -> Json<GeminiKeyStatus> {
    Json(app_state.ai_keys.gemini_status())
}

// =============================================================================
//  ÁREA 2: PARÂMETROS DO MODELO
// =============================================================================

// GET /api/settings/gemini
#[utoipa::path(
    get,
    path = "/api/settings/gemini",
    tag = "Settings",
    responses(
        (status = 200, description = "Configuração ativa", body = AiSettings),
        (status = 404, description = "Nenhuma configuração gravada")
    )
)]
pub async fn get_gemini_settings(State(app_state): State<AppState>) -> Result<Json<AiSettings>, AppError> {
    let settings = app_state
        .ai_settings_repo
        .current()
        .await?
        .ok_or(AppError::NotFound("Configuração do Gemini"))?;
    Ok(Json(settings))
}

// PUT /api/settings/gemini
#[utoipa::path(
    put,
    path = "/api/settings/gemini",
    tag = "Settings",
    request_body = NewAiSettings,
    responses(
        (status = 200, description = "Configuração substituída", body = AiSettings),
        (status = 400, description = "Parâmetros fora dos limites do modelo")
    )
)]
pub async fn update_gemini_settings(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<NewAiSettings>,
) -> Result<Json<AiSettings>, AppError> {
    payload.check()?;

    let settings = app_state
        .ai_settings_repo
        .replace(&app_state.db_pool, &payload)
        .await?;

    tracing::info!(model = %settings.model, max_tokens = settings.max_tokens, "⚙️ Configuração do Gemini atualizada");
    Ok(Json(settings))
}
