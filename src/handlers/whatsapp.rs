// src/handlers/whatsapp.rs

use axum::{extract::State, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::status::{WhatsAppQr, WhatsAppStatus},
};

// GET /api/direct/whatsapp/status
#[utoipa::path(
    get,
    path = "/api/direct/whatsapp/status",
    tag = "WhatsApp",
    responses((status = 200, description = "Estado da sessão", body = WhatsAppStatus))
)]
pub async fn whatsapp_status(State(app_state): State<AppState>) -> Json<WhatsAppStatus> {
    Json(app_state.whatsapp.status())
}

// GET /api/direct/whatsapp/qr
#[utoipa::path(
    get,
    path = "/api/direct/whatsapp/qr",
    tag = "WhatsApp",
    responses((status = 200, description = "QR de pareamento em PNG", body = WhatsAppQr))
)]
pub async fn whatsapp_qr(State(app_state): State<AppState>) -> Result<Json<WhatsAppQr>, AppError> {
    let qr_code = app_state.whatsapp.pairing_qr().await?;
    Ok(Json(WhatsAppQr { qr_code }))
}
