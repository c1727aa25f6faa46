// src/models/ai_settings.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::error::{validation_error, AppError};

pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Limite de tokens de saída por modelo.
pub fn model_token_limit(model: &str) -> i32 {
    match model {
        "gemini-pro" | "gemini-1.0-pro" => 2048,
        m if m.starts_with("gemini-1.5") || m.starts_with("gemini-2") => 8192,
        _ => 2048,
    }
}

// Configuração ativa do Gemini (uma linha por instalação)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub id: i32,
    #[schema(example = "gemini-pro")]
    pub model: String,
    #[schema(example = "professional")]
    pub profession_level: String,
    // Escala inteira 0-100 (70 = 0.7)
    #[schema(example = 70)]
    pub temperature: i32,
    #[schema(example = 500)]
    pub max_tokens: i32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAiSettings {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "gemini-1.5-flash")]
    pub model: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "professional")]
    pub profession_level: String,

    #[validate(range(min = 0, max = 100, message = "A temperatura vai de 0 a 100."))]
    pub temperature: i32,

    #[validate(range(min = 1, message = "maxTokens deve ser positivo."))]
    pub max_tokens: i32,
}

impl NewAiSettings {
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;

        let limit = model_token_limit(&self.model);
        if self.max_tokens > limit {
            return Err(validation_error(
                "maxTokens",
                "above_model_limit",
                &format!("O modelo {} aceita no máximo {} tokens.", self.model, limit),
            ));
        }
        Ok(())
    }
}
