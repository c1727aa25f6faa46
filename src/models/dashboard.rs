// src/models/dashboard.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

// Resumo recalculado pelo servidor, nunca editado diretamente
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub id: i32,
    pub total_leads: i32,
    pub new_leads_this_month: i32,
    pub converted_leads_this_month: i32,
    pub total_messages: i32,
    // Percentual 0-100
    pub response_rate: i32,
    // Minutos
    pub avg_response_time: i32,
    pub leads_per_source: Option<Value>,
    pub updated_at: DateTime<Utc>,
}

impl DashboardStats {
    /// Usado quando a tabela ainda não tem nenhuma linha.
    pub fn empty() -> Self {
        Self {
            id: 0,
            total_leads: 0,
            new_leads_this_month: 0,
            converted_leads_this_month: 0,
            total_messages: 0,
            response_rate: 0,
            avg_response_time: 0,
            leads_per_source: None,
            updated_at: Utc::now(),
        }
    }
}

// Formato de escrita (sem id nem updated_at)
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct NewDashboardStats {
    pub total_leads: i32,
    pub new_leads_this_month: i32,
    pub converted_leads_this_month: i32,
    pub total_messages: i32,
    pub response_rate: i32,
    pub avg_response_time: i32,
    pub leads_per_source: Option<Value>,
}
