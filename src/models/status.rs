// src/models/status.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiStatus {
    #[schema(example = "ok")]
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Health {
    #[schema(example = "ok")]
    pub status: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenAiKeyStatus {
    pub success: bool,
    pub has_key: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeminiKeyStatus {
    pub has_valid_key: bool,
    pub is_temporary_key: bool,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct WhatsAppStatus {
    pub initialized: bool,
    pub ready: bool,
    pub authenticated: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppQr {
    #[schema(example = "data:image/png;base64,iVBORw0KGgo...")]
    pub qr_code: String,
}
