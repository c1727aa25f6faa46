// src/models/activity.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::error::{validation_error, AppError};

// Interação registrada (ligação, e-mail, reunião...) de um usuário com um lead
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i32,
    pub lead_id: i32,
    pub user_id: i32,

    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    #[schema(example = "llamada")]
    pub activity_type: String,

    pub notes: Option<String>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub lead_id: i32,
    pub user_id: i32,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "reunión")]
    pub activity_type: String,

    pub notes: Option<String>,
    pub scheduled_for: Option<DateTime<Utc>>,

    #[serde(default)]
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl NewActivity {
    /// completedAt só existe quando completed = true
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;

        if self.completed_at.is_some() && !self.completed {
            return Err(validation_error(
                "completedAt",
                "requires_completed",
                "completedAt só pode ser informado quando completed = true.",
            ));
        }
        Ok(())
    }

    /// Data de conclusão efetiva: a informada ou agora, se já nasce concluída.
    pub fn effective_completed_at(&self) -> Option<DateTime<Utc>> {
        if self.completed {
            Some(self.completed_at.unwrap_or_else(Utc::now))
        } else {
            None
        }
    }
}
