// src/common/error.rs

use std::collections::HashMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Erro único das rotas. Todo handler devolve Result<_, AppError> e o
// `IntoResponse` abaixo é o ponto central que monta o envelope
// { "error": { "message", "status" } }.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Parâmetro de rota inválido: {0}")]
    InvalidPath(#[from] PathRejection),

    #[error("Valor duplicado: {0}")]
    UniquenessViolation(String),

    #[error("Referência inexistente: {0}")]
    ReferentialIntegrity(String),

    #[error("Restrição violada: {0}")]
    ConstraintViolation(String),

    #[error("{0} inexistente")]
    NotFound(&'static str),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Erro ao gerar QR: {0}")]
    QrCodeError(#[from] qrcode::types::QrError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ConstraintViolation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(rejection) => rejection.status(),
            AppError::InvalidPath(rejection) => rejection.status(),
            AppError::UniquenessViolation(_) => StatusCode::CONFLICT,
            AppError::ReferentialIntegrity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mensagem segura para o cliente. Erros 5xx nunca expõem a causa.
    fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(_) => "Um ou mais campos são inválidos.".to_string(),
            AppError::InvalidBody(rejection) => rejection.body_text(),
            AppError::InvalidPath(rejection) => rejection.body_text(),
            AppError::UniquenessViolation(detail)
            | AppError::ReferentialIntegrity(detail)
            | AppError::ConstraintViolation(detail) => detail.clone(),
            AppError::NotFound(what) => format!("{what} inexistente."),
            AppError::InvalidCredentials => "Usuário ou senha inválidos.".to_string(),
            AppError::InvalidToken => "Token de autenticação inválido ou ausente.".to_string(),
            _ => "Erro interno do servidor.".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Erro Interno do Servidor");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "requisição rejeitada");
        }

        let mut envelope = json!({
            "message": self.public_message(),
            "status": status.as_u16(),
        });

        // Erros de validação levam os detalhes por campo
        if let AppError::ValidationError(errors) = &self {
            let mut details: HashMap<String, Vec<String>> = HashMap::new();
            for (field, field_errors) in errors.field_errors() {
                let messages = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                details.insert(field.to_string(), messages);
            }
            envelope["details"] = json!(details);
        }

        (status, Json(json!({ "error": envelope }))).into_response()
    }
}

/// Monta um erro de validação para um único campo (regras entre campos).
pub fn validation_error(field: &'static str, code: &'static str, message: &str) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    let mut error = validator::ValidationError::new(code);
    error.message = Some(message.to_string().into());
    errors.add(field, error);
    AppError::ValidationError(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn internal_errors_are_sanitized() {
        let (status, body) =
            body_json(AppError::InternalServerError(anyhow::anyhow!("segredo do pool"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["status"], 500);
        assert!(!body.to_string().contains("segredo"));
    }

    #[tokio::test]
    async fn conflicts_keep_their_status_and_message() {
        let (status, body) =
            body_json(AppError::UniquenessViolation("O usuário 'admin' já existe.".into())).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["status"], 409);
        assert_eq!(body["error"]["message"], "O usuário 'admin' já existe.");
    }

    #[tokio::test]
    async fn validation_errors_list_fields() {
        let (status, body) =
            body_json(validation_error("completedAt", "requires_completed", "precisa de completed")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["details"]["completedAt"][0], "precisa de completed");
    }
}
