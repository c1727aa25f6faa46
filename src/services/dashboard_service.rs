// src/services/dashboard_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::DashboardStats,
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
    pool: PgPool,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    pub async fn current(&self) -> Result<DashboardStats, AppError> {
        Ok(self.repo.current().await?.unwrap_or_else(DashboardStats::empty))
    }

    /// Recalcula e grava os agregados. O advisory lock serializa recálculos
    /// concorrentes; o último a entrar lê os dados já commitados do anterior.
    pub async fn refresh(&self) -> Result<DashboardStats, AppError> {
        let mut tx = self.pool.begin().await?;

        self.repo.lock(&mut *tx).await?;
        let computed = self.repo.compute(&mut *tx).await?;
        let saved = self.repo.save(&mut *tx, &computed).await?;

        tx.commit().await?;

        tracing::info!(
            total_leads = saved.total_leads,
            total_messages = saved.total_messages,
            response_rate = saved.response_rate,
            "📊 Estatísticas do dashboard recalculadas"
        );
        Ok(saved)
    }
}
