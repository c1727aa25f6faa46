// src/models/message.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::error::AppError;

// Mapeia o CREATE TYPE message_direction do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq, Eq)]
#[sqlx(type_name = "message_direction", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    Inbound,
    Outbound,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub lead_id: i32,
    pub content: String,
    pub direction: MessageDirection,
    #[schema(example = "whatsapp")]
    pub channel: String,
    pub read: bool,
    // Blob opaco, guardado como JSONB
    pub metadata: Option<Value>,
    pub sent_at: DateTime<Utc>,
}

// Só o id é gerado pelo servidor; sentAt ausente = agora
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub lead_id: i32,

    #[validate(length(min = 1, message = "required"))]
    pub content: String,

    pub direction: MessageDirection,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "whatsapp")]
    pub channel: String,

    #[serde(default)]
    pub read: bool,

    pub metadata: Option<Value>,

    pub sent_at: Option<DateTime<Utc>>,
}

impl NewMessage {
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        Ok(())
    }
}
