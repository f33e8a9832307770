// src/db/user_repo.rs

use sqlx::MySqlConnection;

use crate::{common::error::AppError, models::auth::Usuario};

// O repositório de usuários, responsável por todas as interações com a
// tabela 'usuarios'. Os métodos recebem a conexão adquirida pela requisição
// (gateway em common::db_utils), nunca a pool direto.
pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_username(
        conn: &mut MySqlConnection,
        username: &str,
    ) -> Result<Option<Usuario>, AppError> {
        let maybe_user = sqlx::query_as::<_, Usuario>(
            "SELECT id, username, password, email FROM usuarios WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(maybe_user)
    }

    // Cria um novo usuário, com tratamento de erro específico para o
    // username duplicado (UNIQUE no schema).
    pub async fn create(
        conn: &mut MySqlConnection,
        username: &str,
        password_hash: &str,
        email: &str,
    ) -> Result<(), AppError> {
        sqlx::query("INSERT INTO usuarios (username, password, email) VALUES (?, ?, ?)")
            .bind(username)
            .bind(password_hash)
            .bind(email)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::UsernameAlreadyExists;
                    }
                }
                e.into()
            })?;
        Ok(())
    }
}
