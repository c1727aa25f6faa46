// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::error::{validation_error, AppError};

pub const DEFAULT_ROLE: &str = "user";

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    #[schema(example = "admin")]
    pub username: String,

    // Hash bcrypt, nunca sai na resposta
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub password: String,

    #[schema(example = "Administrador")]
    pub full_name: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "admin")]
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// Dados para cadastro de um novo usuário (sem id nem created_at)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 3, max = 64, message = "O usuário deve ter entre 3 e 64 caracteres."))]
    #[schema(example = "vendedor1")]
    pub username: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Ana Pérez")]
    pub full_name: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "ana@example.com")]
    pub email: String,

    #[schema(example = "user")]
    pub role: Option<String>,
}

impl NewUser {
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;

        if self.username.chars().any(char::is_whitespace) {
            return Err(validation_error("username", "whitespace", "O usuário não pode conter espaços."));
        }
        if self.role.as_deref().is_some_and(|r| r.trim().is_empty()) {
            return Err(validation_error("role", "required", "O papel não pode ser vazio."));
        }
        Ok(())
    }

    pub fn role(&self) -> &str {
        self.role.as_deref().map(str::trim).unwrap_or(DEFAULT_ROLE)
    }
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "required"))]
    pub username: String,
    #[validate(length(min = 1, message = "required"))]
    pub password: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // ID do usuário
    pub username: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}
