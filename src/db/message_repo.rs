// src/db/message_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{db_utils::classify_db_error, error::AppError},
    models::message::{Message, NewMessage},
};

const MESSAGE_COLUMNS: &str = "id, lead_id, content, direction, channel, read, metadata, sent_at";

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Conversa do lead em ordem cronológica
    pub async fn list_by_lead(&self, lead_id: i32) -> Result<Vec<Message>, AppError> {
        let messages = sqlx::query_as::<_, Message>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE lead_id = $1 ORDER BY sent_at ASC, id ASC"
        ))
        .bind(lead_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(messages)
    }

    pub async fn create_message<'e, E>(&self, executor: E, input: &NewMessage) -> Result<Message, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Message>(&format!(
            r#"
            INSERT INTO messages (lead_id, content, direction, channel, read, metadata, sent_at)
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()))
            RETURNING {MESSAGE_COLUMNS}
            "#
        ))
        .bind(input.lead_id)
        .bind(&input.content)
        .bind(input.direction)
        .bind(&input.channel)
        .bind(input.read)
        .bind(&input.metadata)
        .bind(input.sent_at)
        .fetch_one(executor)
        .await
        .map_err(|e| classify_db_error(e, "mensagem"))
    }

    pub async fn mark_read<'e, E>(&self, executor: E, id: i32) -> Result<Option<Message>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let message = sqlx::query_as::<_, Message>(&format!(
            "UPDATE messages SET read = TRUE WHERE id = $1 RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(message)
    }
}
