// src/handlers/status.rs

use axum::Json;
use chrono::Utc;

use crate::models::status::{ApiStatus, Health};

// GET /api/status
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    responses((status = 200, description = "API no ar", body = ApiStatus))
)]
pub async fn api_status() -> Json<ApiStatus> {
    Json(ApiStatus { status: "ok", timestamp: Utc::now() })
}

// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "Status",
    responses((status = 200, description = "Processo vivo", body = Health))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}
