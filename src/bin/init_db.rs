// src/bin/init_db.rs
//
// Cria tabelas, tipos e sementes. Pode ser executado quantas vezes quiser.

use std::process::ExitCode;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use crm_backend::{config::AppConfig, db::init::initialize};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "❌ Configuração inválida");
            return ExitCode::FAILURE;
        }
    };

    let pool = match PgPoolOptions::new().max_connections(1).connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "❌ Não foi possível conectar ao banco de dados");
            return ExitCode::FAILURE;
        }
    };

    let outcome = initialize(&pool).await;
    pool.close().await;

    match outcome {
        Ok(report) => {
            tracing::info!(statements = report.statements, "🌱 Inicialização concluída");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "❌ Inicialização abortada, nada foi gravado");
            ExitCode::FAILURE
        }
    }
}
