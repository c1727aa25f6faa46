// src/db/dashboard_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::dashboard::{DashboardStats, NewDashboardStats},
};

const STATS_COLUMNS: &str = "id, total_leads, new_leads_this_month, converted_leads_this_month, \
     total_messages, response_rate, avg_response_time, leads_per_source, updated_at";

// Chave do advisory lock que serializa os recálculos
pub const STATS_LOCK_KEY: i64 = 0x0C12_DA5B;

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A linha ativa é sempre a de menor id.
    pub async fn current(&self) -> Result<Option<DashboardStats>, AppError> {
        let stats = sqlx::query_as::<_, DashboardStats>(&format!(
            "SELECT {STATS_COLUMNS} FROM dashboard_stats ORDER BY id ASC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await?;
        Ok(stats)
    }

    /// Só tem efeito dentro de uma transação; liberado no commit/rollback.
    pub async fn lock<'e, E>(&self, executor: E) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(STATS_LOCK_KEY)
            .execute(executor)
            .await?;
        Ok(())
    }

    // Agregados calculados a partir de leads e mensagens
    pub async fn compute<'e, E>(&self, executor: E) -> Result<NewDashboardStats, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let stats = sqlx::query_as::<_, NewDashboardStats>(
            r#"
            WITH inbound AS (
                SELECT
                    m.sent_at,
                    (
                        SELECT MIN(o.sent_at)
                        FROM messages o
                        WHERE o.lead_id = m.lead_id
                          AND o.direction = 'outbound'
                          AND o.sent_at > m.sent_at
                    ) AS replied_at
                FROM messages m
                WHERE m.direction = 'inbound'
            ),
            sources AS (
                SELECT COALESCE(source, 'desconocido') AS source, COUNT(*)::int AS total
                FROM leads
                GROUP BY 1
            )
            SELECT
                (SELECT COUNT(*) FROM leads)::int AS total_leads,
                (SELECT COUNT(*) FROM leads
                  WHERE created_at >= date_trunc('month', NOW()))::int AS new_leads_this_month,
                (SELECT COUNT(*) FROM leads
                  WHERE status = 'cerrado'
                    AND COALESCE(last_contact, created_at) >= date_trunc('month', NOW()))::int AS converted_leads_this_month,
                (SELECT COUNT(*) FROM messages)::int AS total_messages,
                COALESCE((SELECT ROUND(100.0 * COUNT(replied_at) / NULLIF(COUNT(*), 0)) FROM inbound), 0)::int AS response_rate,
                COALESCE((SELECT ROUND(AVG(EXTRACT(EPOCH FROM (replied_at - sent_at)) / 60.0))
                            FROM inbound WHERE replied_at IS NOT NULL), 0)::int AS avg_response_time,
                (SELECT jsonb_object_agg(source, total) FROM sources) AS leads_per_source
            "#,
        )
        .fetch_one(executor)
        .await?;
        Ok(stats)
    }

    /// Atualiza a linha ativa ou cria a primeira.
    pub async fn save<'e, E>(&self, executor: E, stats: &NewDashboardStats) -> Result<DashboardStats, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let saved = sqlx::query_as::<_, DashboardStats>(&format!(
            r#"
            WITH updated AS (
                UPDATE dashboard_stats
                SET total_leads = $1,
                    new_leads_this_month = $2,
                    converted_leads_this_month = $3,
                    total_messages = $4,
                    response_rate = $5,
                    avg_response_time = $6,
                    leads_per_source = $7,
                    updated_at = NOW()
                WHERE id = (SELECT id FROM dashboard_stats ORDER BY id ASC LIMIT 1)
                RETURNING {STATS_COLUMNS}
            ),
            inserted AS (
                INSERT INTO dashboard_stats (
                    total_leads, new_leads_this_month, converted_leads_this_month,
                    total_messages, response_rate, avg_response_time, leads_per_source
                )
                SELECT $1, $2, $3, $4, $5, $6, $7
                WHERE NOT EXISTS (SELECT 1 FROM updated)
                RETURNING {STATS_COLUMNS}
            )
            SELECT {STATS_COLUMNS} FROM updated
            UNION ALL
            SELECT {STATS_COLUMNS} FROM inserted
            "#
        ))
        .bind(stats.total_leads)
        .bind(stats.new_leads_this_month)
        .bind(stats.converted_leads_this_month)
        .bind(stats.total_messages)
        .bind(stats.response_rate)
        .bind(stats.avg_response_time)
        .bind(&stats.leads_per_source)
        .fetch_one(executor)
        .await?;
        Ok(saved)
    }
}
