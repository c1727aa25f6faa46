// src/db/lead_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{db_utils::classify_db_error, error::AppError},
    models::lead::{Lead, LeadStatus, NewLead},
};

const LEAD_COLUMNS: &str = "id, name, email, phone, company, status, source, assigned_to, notes, last_contact, created_at";

#[derive(Clone)]
pub struct LeadRepository {
    pool: PgPool,
}

impl LeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Lead>, AppError> {
        let leads = sqlx::query_as::<_, Lead>(&format!(
            "SELECT {LEAD_COLUMNS} FROM leads ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(leads)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Lead>, AppError> {
        let lead = sqlx::query_as::<_, Lead>(&format!("SELECT {LEAD_COLUMNS} FROM leads WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(lead)
    }

    /// assignedTo inexistente falha com ReferentialIntegrity
    pub async fn create_lead<'e, E>(&self, executor: E, input: &NewLead) -> Result<Lead, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Lead>(&format!(
            r#"
            INSERT INTO leads (name, email, phone, company, status, source, assigned_to, notes, last_contact)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {LEAD_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.company)
        .bind(input.status())
        .bind(&input.source)
        .bind(input.assigned_to)
        .bind(&input.notes)
        .bind(input.last_contact)
        .fetch_one(executor)
        .await
        .map_err(|e| classify_db_error(e, "lead"))
    }

    /// Move o lead de etapa e registra o contato.
    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        id: i32,
        status: LeadStatus,
    ) -> Result<Option<Lead>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let lead = sqlx::query_as::<_, Lead>(&format!(
            r#"
            UPDATE leads
            SET status = $2, last_contact = NOW()
            WHERE id = $1
            RETURNING {LEAD_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(executor)
        .await?;
        Ok(lead)
    }

    /// Atividades, mensagens e pesquisas caem junto (ON DELETE CASCADE).
    pub async fn delete_lead<'e, E>(&self, executor: E, id: i32) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
