// src/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "CRM API", description = "Leads, conversas e indicadores do funil de vendas"),
    paths(
        // --- Status ---
        handlers::status::api_status,
        handlers::status::health,

        // --- Users / Auth ---
        handlers::users::list_users,
        handlers::users::create_user,
        handlers::auth::login,

        // --- Leads ---
        handlers::leads::list_leads,
        handlers::leads::create_lead,
        handlers::leads::get_lead,
        handlers::leads::update_lead_status,
        handlers::leads::delete_lead,
        handlers::leads::list_lead_activities,
        handlers::leads::list_lead_messages,
        handlers::leads::list_lead_surveys,

        // --- Activities / Messages / Surveys ---
        handlers::activities::create_activity,
        handlers::activities::complete_activity,
        handlers::messages::create_message,
        handlers::messages::mark_message_read,
        handlers::surveys::create_survey,
        handlers::surveys::complete_survey,

        // --- Dashboard ---
        handlers::dashboard::get_stats,
        handlers::dashboard::refresh_stats,

        // --- Settings ---
        handlers::settings::openai_key_status,
        handlers::settings::gemini_key_status,
        handlers::settings::get_gemini_settings,
        handlers::settings::update_gemini_settings,

        // --- WhatsApp ---
        handlers::whatsapp::whatsapp_status,
        handlers::whatsapp::whatsapp_qr,
    ),
    components(
        schemas(
            // --- Users ---
            models::user::User,
            models::user::NewUser,
            models::user::LoginPayload,
            models::user::AuthResponse,

            // --- Leads ---
            models::lead::LeadStatus,
            models::lead::Lead,
            models::lead::NewLead,
            models::lead::UpdateLeadStatus,

            // --- Histórico ---
            models::activity::Activity,
            models::activity::NewActivity,
            models::message::MessageDirection,
            models::message::Message,
            models::message::NewMessage,
            models::survey::Survey,
            models::survey::NewSurvey,
            models::survey::CompleteSurvey,

            // --- Dashboard / Settings ---
            models::dashboard::DashboardStats,
            models::ai_settings::AiSettings,
            models::ai_settings::NewAiSettings,

            // --- Status ---
            models::status::ApiStatus,
            models::status::Health,
            models::status::OpenAiKeyStatus,
            models::status::GeminiKeyStatus,
            models::status::WhatsAppStatus,
            models::status::WhatsAppQr,
        )
    ),
    tags(
        (name = "Status", description = "Saúde do processo"),
        (name = "Users", description = "Cadastro de usuários"),
        (name = "Auth", description = "Autenticação"),
        (name = "Leads", description = "Funil de vendas"),
        (name = "Activities", description = "Interações registradas"),
        (name = "Messages", description = "Conversas por canal"),
        (name = "Surveys", description = "Pesquisas de satisfação"),
        (name = "Dashboard", description = "Indicadores gerenciais"),
        (name = "Settings", description = "Credenciais e parâmetros de IA"),
        (name = "WhatsApp", description = "Integração direta com o WhatsApp")
    )
)]
pub struct ApiDoc;

// GET /api/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
