// src/db/user_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{db_utils::classify_db_error, error::AppError},
    models::user::{NewUser, User},
};

const USER_COLUMNS: &str = "id, username, password, full_name, email, role, created_at";

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_user)
    }

    // Cria um novo usuário. Username duplicado vira UniquenessViolation.
    pub async fn create_user<'e, E>(
        &self,
        executor: E,
        new_user: &NewUser,
        password_hash: &str,
    ) -> Result<User, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, password, full_name, email, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new_user.username)
        .bind(password_hash)
        .bind(&new_user.full_name)
        .bind(&new_user.email)
        .bind(new_user.role())
        .fetch_one(executor)
        .await
        .map_err(|e| match classify_db_error(e, "usuário") {
            AppError::UniquenessViolation(_) => AppError::UniquenessViolation(format!(
                "O usuário '{}' já existe.",
                new_user.username
            )),
            other => other,
        })
    }
}
