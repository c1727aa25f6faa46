// src/db/ai_settings_repo.rs

use sqlx::{Acquire, Executor, PgPool, Postgres};

use crate::{
    common::{db_utils::classify_db_error, error::AppError},
    models::ai_settings::{AiSettings, NewAiSettings},
};

const SETTINGS_COLUMNS: &str = "id, model, profession_level, temperature, max_tokens, updated_at";

// Serializa as substituições, inclusive quando a tabela ainda está vazia
pub const SETTINGS_LOCK_KEY: i64 = 0x0C12_A15E;

#[derive(Clone)]
pub struct AiSettingsRepository {
    pool: PgPool,
}

impl AiSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn current(&self) -> Result<Option<AiSettings>, AppError> {
        let settings = sqlx::query_as::<_, AiSettings>(&format!(
            "SELECT {SETTINGS_COLUMNS} FROM gemini_settings ORDER BY id ASC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await?;
        Ok(settings)
    }

    /// Substitui a configuração ativa (ou cria a primeira) numa transação.
    /// O advisory lock garante uma única linha mesmo com PUTs simultâneos;
    /// a última escrita vence.
    pub async fn replace<'e, E>(&self, executor: E, input: &NewAiSettings) -> Result<AiSettings, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SETTINGS_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        let active_id: Option<i32> =
            sqlx::query_scalar("SELECT id FROM gemini_settings ORDER BY id ASC LIMIT 1 FOR UPDATE")
                .fetch_optional(&mut *tx)
                .await?;

        let sql = match active_id {
            Some(_) => format!(
                r#"
                UPDATE gemini_settings
                SET model = $2, profession_level = $3, temperature = $4, max_tokens = $5, updated_at = NOW()
                WHERE id = $1
                RETURNING {SETTINGS_COLUMNS}
                "#
            ),
            None => format!(
                r#"
                INSERT INTO gemini_settings (model, profession_level, temperature, max_tokens)
                VALUES ($1, $2, $3, $4)
                RETURNING {SETTINGS_COLUMNS}
                "#
            ),
        };

        let mut query = sqlx::query_as::<_, AiSettings>(&sql);
        if let Some(id) = active_id {
            query = query.bind(id);
        }

        let settings = query
            .bind(&input.model)
            .bind(&input.profession_level)
            .bind(input.temperature)
            .bind(input.max_tokens)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| classify_db_error(e, "configuração de IA"))?;

        tx.commit().await?;

        Ok(settings)
    }
}
