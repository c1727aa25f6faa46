// src/common/db_utils.rs

use crate::common::error::AppError;

// ---
// Classificação dos erros do Postgres
// ---
/// Converte um `sqlx::Error` no erro de domínio correspondente.
/// `context` descreve a operação (ex: "atividade") e vai para a mensagem.
pub(crate) fn classify_db_error(e: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::UniquenessViolation(format!(
                "Já existe um registro de {context} com este valor ({}).",
                db_err.constraint().unwrap_or("unique")
            ));
        }
        if db_err.is_foreign_key_violation() {
            return AppError::ReferentialIntegrity(format!(
                "O registro de {context} referencia um id inexistente ({}).",
                db_err.constraint().unwrap_or("foreign key")
            ));
        }
        if db_err.is_check_violation() {
            return AppError::ConstraintViolation(format!(
                "O registro de {context} viola a regra '{}'.",
                db_err.constraint().unwrap_or("check")
            ));
        }
    }
    e.into()
}
