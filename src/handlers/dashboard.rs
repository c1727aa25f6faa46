// src/handlers/dashboard.rs

use axum::{extract::State, Json};

use crate::{common::error::AppError, config::AppState, models::dashboard::DashboardStats};

// GET /api/dashboard/stats
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses((status = 200, description = "Últimos indicadores calculados", body = DashboardStats))
)]
pub async fn get_stats(State(app_state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    let stats = app_state.dashboard_service.current().await?;
    Ok(Json(stats))
}

// POST /api/dashboard/stats/refresh
#[utoipa::path(
    post,
    path = "/api/dashboard/stats/refresh",
    tag = "Dashboard",
    responses((status = 200, description = "Indicadores recalculados", body = DashboardStats))
)]
pub async fn refresh_stats(State(app_state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    let stats = app_state.dashboard_service.refresh().await?;
    Ok(Json(stats))
}
