// src/models/survey.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::error::{validation_error, AppError};

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: i32,
    pub lead_id: i32,
    pub title: String,
    pub content: String,
    pub responses: Option<Value>,
    pub sent_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

// sentAt é sempre definido pelo servidor
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSurvey {
    pub lead_id: i32,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Satisfacción con la demo")]
    pub title: String,

    #[validate(length(min = 1, message = "required"))]
    pub content: String,

    pub responses: Option<Value>,
    pub completed_at: Option<DateTime<Utc>>,
}

// null, {}, [] e "" não contam como respostas
fn has_responses(responses: Option<&Value>) -> bool {
    match responses {
        None | Some(Value::Null) => false,
        Some(Value::Object(fields)) => !fields.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::String(text)) => !text.trim().is_empty(),
        Some(_) => true,
    }
}

impl NewSurvey {
    /// completedAt exige respostas preenchidas
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;

        if self.completed_at.is_some() && !has_responses(self.responses.as_ref()) {
            return Err(validation_error(
                "responses",
                "required_when_completed",
                "Uma pesquisa concluída precisa de respostas.",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSurvey {
    pub responses: Value,
}

impl CompleteSurvey {
    pub fn check(&self) -> Result<(), AppError> {
        if !has_responses(Some(&self.responses)) {
            return Err(validation_error("responses", "required", "As respostas são obrigatórias."));
        }
        Ok(())
    }
}
