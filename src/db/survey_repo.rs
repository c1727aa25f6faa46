// src/db/survey_repo.rs

use serde_json::Value;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{db_utils::classify_db_error, error::AppError},
    models::survey::{NewSurvey, Survey},
};

const SURVEY_COLUMNS: &str = "id, lead_id, title, content, responses, sent_at, completed_at";

#[derive(Clone)]
pub struct SurveyRepository {
    pool: PgPool,
}

impl SurveyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_lead(&self, lead_id: i32) -> Result<Vec<Survey>, AppError> {
        let surveys = sqlx::query_as::<_, Survey>(&format!(
            "SELECT {SURVEY_COLUMNS} FROM surveys WHERE lead_id = $1 ORDER BY sent_at DESC"
        ))
        .bind(lead_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(surveys)
    }

    pub async fn create_survey<'e, E>(&self, executor: E, input: &NewSurvey) -> Result<Survey, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Survey>(&format!(
            r#"
            INSERT INTO surveys (lead_id, title, content, responses, completed_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SURVEY_COLUMNS}
            "#
        ))
        .bind(input.lead_id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.responses)
        .bind(input.completed_at)
        .fetch_one(executor)
        .await
        .map_err(|e| classify_db_error(e, "pesquisa"))
    }

    /// Grava as respostas e fecha a pesquisa no mesmo UPDATE.
    pub async fn complete<'e, E>(
        &self,
        executor: E,
        id: i32,
        responses: &Value,
    ) -> Result<Option<Survey>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Survey>(&format!(
            r#"
            UPDATE surveys
            SET responses = $2, completed_at = NOW()
            WHERE id = $1
            RETURNING {SURVEY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(responses)
        .fetch_optional(executor)
        .await
        .map_err(|e| classify_db_error(e, "pesquisa"))
    }
}
