// src/models/lead.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::error::AppError;

// --- ENUMS ---

// Mapeia o CREATE TYPE lead_status do banco (etapas do funil)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq, Eq)]
#[sqlx(type_name = "lead_status")]
pub enum LeadStatus {
    #[default]
    #[sqlx(rename = "nuevo")]
    #[serde(rename = "nuevo")]
    New,
    #[sqlx(rename = "contactado")]
    #[serde(rename = "contactado")]
    Contacted,
    #[sqlx(rename = "negociación")]
    #[serde(rename = "negociación")]
    Negotiation,
    #[sqlx(rename = "cerrado")]
    #[serde(rename = "cerrado")]
    Closed,
    #[sqlx(rename = "perdido")]
    #[serde(rename = "perdido")]
    Lost,
}

impl LeadStatus {
    pub fn is_final(self) -> bool {
        matches!(self, LeadStatus::Closed | LeadStatus::Lost)
    }
}

// --- LEAD (O cliente em potencial) ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i32,
    #[schema(example = "Distribuidora Global")]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: LeadStatus,
    #[schema(example = "web")]
    pub source: Option<String>,
    pub assigned_to: Option<i32>,
    pub notes: Option<String>,
    pub last_contact: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Tecnología Innovadora S.A.")]
    pub name: String,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "contacto@tecnologiainnovadora.com")]
    pub email: Option<String>,

    #[schema(example = "+5491198765432")]
    pub phone: Option<String>,
    pub company: Option<String>,

    // Ausente = "nuevo"
    pub status: Option<LeadStatus>,

    pub source: Option<String>,
    pub assigned_to: Option<i32>,
    pub notes: Option<String>,
    pub last_contact: Option<DateTime<Utc>>,
}

impl NewLead {
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        Ok(())
    }

    pub fn status(&self) -> LeadStatus {
        self.status.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadStatus {
    pub status: LeadStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_pipeline_names_on_the_wire() {
        assert_eq!(serde_json::to_value(LeadStatus::Negotiation).unwrap(), "negociación");
        let parsed: LeadStatus = serde_json::from_str("\"perdido\"").unwrap();
        assert_eq!(parsed, LeadStatus::Lost);
        assert!(serde_json::from_str::<LeadStatus>("\"ganado\"").is_err());
    }

    #[test]
    fn new_lead_defaults_to_nuevo() {
        let lead: NewLead = serde_json::from_str(r#"{"name":"Manufacturas del Sur"}"#).unwrap();
        assert!(lead.check().is_ok());
        assert_eq!(lead.status(), LeadStatus::New);
    }

    #[test]
    fn new_lead_requires_a_name() {
        let lead: NewLead = serde_json::from_str(r#"{"name":"","email":"x@y.com"}"#).unwrap();
        assert!(matches!(lead.check(), Err(AppError::ValidationError(_))));
    }
}
