// src/handlers/messages.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{
        error::AppError,
        extract::{ApiJson, ApiPath},
    },
    config::AppState,
    models::message::{Message, MessageDirection, NewMessage},
};

// POST /api/messages
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "Messages",
    request_body = NewMessage,
    responses(
        (status = 201, description = "Mensagem registrada", body = Message),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Lead inexistente")
    )
)]
pub async fn create_message(
    State(app_state): State<AppState>,
    ApiJson(payload): ApiJson<NewMessage>,
) -> Result<impl IntoResponse, AppError> {
    payload.check()?;

    let message = app_state
        .message_repo
        .create_message(&app_state.db_pool, &payload)
        .await?;

    // Só mensagens recebidas viram notificação em tempo real
    if message.direction == MessageDirection::Inbound {
        let delivered = app_state.notifications.notify_inbound_message(&message);
        tracing::debug!(message_id = message.id, delivered, "Notificação de mensagem publicada");
    }

    Ok((StatusCode::CREATED, Json(message)))
}

// POST /api/messages/{id}/read
#[utoipa::path(
    post,
    path = "/api/messages/{id}/read",
    tag = "Messages",
    params(("id" = i32, Path, description = "ID da mensagem")),
    responses(
        (status = 200, description = "Mensagem marcada como lida", body = Message),
        (status = 404, description = "Mensagem não encontrada")
    )
)]
pub async fn mark_message_read(
    State(app_state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let message = app_state
        .message_repo
        .mark_read(&app_state.db_pool, id)
        .await?
        .ok_or(AppError::NotFound("Mensagem"))?;
    Ok(Json(message))
}
