// src/db/init.rs

use sqlx::PgPool;
use thiserror::Error;

use crate::db::schema::{default_plan, InitStatement};

#[derive(Debug, Error)]
pub enum InitError {
    #[error("falha ao abrir a transação: {0}")]
    Begin(#[source] sqlx::Error),

    #[error("falha em '{statement}': {source}")]
    Statement {
        statement: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("falha no commit: {0}")]
    Commit(#[source] sqlx::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub statements: usize,
}

/// Cria a estrutura e as sementes numa única transação.
pub async fn initialize(pool: &PgPool) -> Result<InitReport, InitError> {
    apply(pool, &default_plan()).await
}

/// Executa `plan` em ordem, tudo ou nada: qualquer falha desfaz a execução
/// inteira (tabelas e sementes) e a conexão volta para a pool.
pub async fn apply(pool: &PgPool, plan: &[InitStatement]) -> Result<InitReport, InitError> {
    let mut tx = pool.begin().await.map_err(InitError::Begin)?;

    for statement in plan {
        tracing::debug!(statement = statement.name, "executando");

        if let Err(source) = sqlx::raw_sql(statement.sql).execute(&mut *tx).await {
            tracing::error!(statement = statement.name, error = %source, "🔥 Falha na inicialização, desfazendo");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "rollback falhou; a conexão será descartada");
            }
            return Err(InitError::Statement { statement: statement.name, source });
        }
    }

    tx.commit().await.map_err(InitError::Commit)?;

    tracing::info!(statements = plan.len(), "✅ Banco de dados inicializado");
    Ok(InitReport { statements: plan.len() })
}
