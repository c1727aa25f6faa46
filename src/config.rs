// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use crate::{
    db::{
        ActivityRepository, AiSettingsRepository, DashboardRepository, LeadRepository,
        MessageRepository, SurveyRepository, UserRepository,
    },
    services::{
        ai_keys::AiKeyManager,
        auth::AuthService,
        dashboard_service::DashboardService,
        realtime::NotificationHub,
        whatsapp::WhatsAppChannel,
    },
};

pub const DEFAULT_PORT: u16 = 5000;
const DEV_SESSION_SECRET: &str = "secreto-desarrollo-local";

// Erros de configuração são fatais: o processo sai antes de abrir o listener.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} deve ser definida")]
    MissingVariable(&'static str),

    #[error("{name} inválida: '{value}'")]
    InvalidVariable { name: &'static str, value: String },
}

/// Configuração lida uma única vez na inicialização.
/// Nenhum outro módulo consulta o ambiente diretamente.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub session_secret: String,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub production: bool,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Valores vazios contam como ausentes
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::MissingVariable("DATABASE_URL"))?;

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidVariable {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let production = get("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let session_secret = match get("SESSION_SECRET") {
            Some(secret) => secret,
            None => {
                tracing::warn!("SESSION_SECRET ausente, usando o segredo de desenvolvimento");
                DEV_SESSION_SECRET.to_string()
            }
        };

        let allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            session_secret,
            gemini_api_key: get("GEMINI_API_KEY"),
            openai_api_key: get("OPENAI_API_KEY"),
            port,
            production,
            allowed_origins,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Arc<AppConfig>,

    pub user_repo: UserRepository,
    pub lead_repo: LeadRepository,
    pub activity_repo: ActivityRepository,
    pub message_repo: MessageRepository,
    pub survey_repo: SurveyRepository,
    pub ai_settings_repo: AiSettingsRepository,

    pub auth_service: AuthService,
    pub dashboard_service: DashboardService,
    pub ai_keys: AiKeyManager,
    pub whatsapp: WhatsAppChannel,
    pub notifications: NotificationHub,
}

impl AppState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(config, db_pool))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_pool(config: AppConfig, db_pool: PgPool) -> Self {
        let config = Arc::new(config);

        let user_repo = UserRepository::new(db_pool.clone());
        let auth_service = AuthService::new(user_repo.clone(), config.session_secret.clone(), db_pool.clone());
        let dashboard_service = DashboardService::new(DashboardRepository::new(db_pool.clone()), db_pool.clone());

        Self {
            lead_repo: LeadRepository::new(db_pool.clone()),
            activity_repo: ActivityRepository::new(db_pool.clone()),
            message_repo: MessageRepository::new(db_pool.clone()),
            survey_repo: SurveyRepository::new(db_pool.clone()),
            ai_settings_repo: AiSettingsRepository::new(db_pool.clone()),
            ai_keys: AiKeyManager::new(&config),
            whatsapp: WhatsAppChannel::new(),
            notifications: NotificationHub::new(),
            user_repo,
            auth_service,
            dashboard_service,
            db_pool,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn database_url_is_required() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVariable("DATABASE_URL")));
    }

    #[test]
    fn defaults_apply_when_optional_values_are_absent() {
        let cfg = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/crm")])).unwrap();

        assert_eq!(cfg.port, DEFAULT_PORT);
        assert!(!cfg.production);
        assert_eq!(cfg.session_secret, DEV_SESSION_SECRET);
        assert!(cfg.gemini_api_key.is_none());
        assert!(cfg.openai_api_key.is_none());
    }

    #[test]
    fn empty_credentials_count_as_absent() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/crm"),
            ("OPENAI_API_KEY", ""),
            ("GEMINI_API_KEY", "   "),
        ]))
        .unwrap();

        assert!(cfg.openai_api_key.is_none());
        assert!(cfg.gemini_api_key.is_none());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/crm"),
            ("PORT", "cinco mil"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidVariable { name: "PORT", .. }));
    }

    #[test]
    fn production_mode_reads_origins() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/crm"),
            ("APP_ENV", "Production"),
            ("CORS_ALLOWED_ORIGINS", "https://crm.example.com, https://admin.example.com,"),
        ]))
        .unwrap();

        assert!(cfg.production);
        assert_eq!(
            cfg.allowed_origins,
            vec!["https://crm.example.com".to_string(), "https://admin.example.com".to_string()]
        );
    }
}
