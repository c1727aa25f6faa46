// src/db/activity_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{db_utils::classify_db_error, error::AppError},
    models::activity::{Activity, NewActivity},
};

const ACTIVITY_COLUMNS: &str =
    "id, lead_id, user_id, type, notes, scheduled_for, completed, completed_at, created_at";

#[derive(Clone)]
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_lead(&self, lead_id: i32) -> Result<Vec<Activity>, AppError> {
        let activities = sqlx::query_as::<_, Activity>(&format!(
            r#"
            SELECT {ACTIVITY_COLUMNS}
            FROM activities
            WHERE lead_id = $1
            ORDER BY COALESCE(scheduled_for, created_at) DESC
            "#
        ))
        .bind(lead_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(activities)
    }

    /// Lead ou usuário inexistente falha com ReferentialIntegrity e nada é gravado.
    pub async fn create_activity<'e, E>(&self, executor: E, input: &NewActivity) -> Result<Activity, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Activity>(&format!(
            r#"
            INSERT INTO activities (lead_id, user_id, type, notes, scheduled_for, completed, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ACTIVITY_COLUMNS}
            "#
        ))
        .bind(input.lead_id)
        .bind(input.user_id)
        .bind(&input.activity_type)
        .bind(&input.notes)
        .bind(input.scheduled_for)
        .bind(input.completed)
        .bind(input.effective_completed_at())
        .fetch_one(executor)
        .await
        .map_err(|e| classify_db_error(e, "atividade"))
    }

    /// Marca como concluída. Já concluída mantém o completed_at original.
    pub async fn complete<'e, E>(&self, executor: E, id: i32) -> Result<Option<Activity>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let activity = sqlx::query_as::<_, Activity>(&format!(
            r#"
            UPDATE activities
            SET completed = TRUE, completed_at = COALESCE(completed_at, NOW())
            WHERE id = $1
            RETURNING {ACTIVITY_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(activity)
    }
}
