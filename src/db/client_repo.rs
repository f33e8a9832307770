// src/db/client_repo.rs

use sqlx::MySqlConnection;

use crate::{
    common::{
        db_utils::{PER_PAGE, offset, total_pages},
        error::AppError,
    },
    models::client::Cliente,
};

pub struct ClientRepository;

impl ClientRepository {
    pub async fn list(
        conn: &mut MySqlConnection,
        page: i64,
    ) -> Result<(Vec<Cliente>, i64), AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT id, nombre, email, telefono, direccion, fecha_registro \
             FROM clientes ORDER BY fecha_registro DESC LIMIT ? OFFSET ?",
        )
        .bind(PER_PAGE)
        .bind(offset(page))
        .fetch_all(&mut *conn)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clientes")
            .fetch_one(&mut *conn)
            .await?;

        Ok((clientes, total_pages(total)))
    }

    pub async fn find_by_id(
        conn: &mut MySqlConnection,
        id: i64,
    ) -> Result<Option<Cliente>, AppError> {
        let maybe_cliente = sqlx::query_as::<_, Cliente>(
            "SELECT id, nombre, email, telefono, direccion, fecha_registro \
             FROM clientes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(maybe_cliente)
    }

    pub async fn create(
        conn: &mut MySqlConnection,
        nombre: &str,
        email: &str,
        telefono: &str,
        direccion: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO clientes (nombre, email, telefono, direccion) VALUES (?, ?, ?, ?)",
        )
        .bind(nombre)
        .bind(email)
        .bind(telefono)
        .bind(direccion)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    pub async fn update(
        conn: &mut MySqlConnection,
        id: i64,
        nombre: &str,
        email: &str,
        telefono: &str,
        direccion: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE clientes SET nombre = ?, email = ?, telefono = ?, direccion = ? WHERE id = ?",
        )
        .bind(nombre)
        .bind(email)
        .bind(telefono)
        .bind(direccion)
        .bind(id)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    pub async fn delete(conn: &mut MySqlConnection, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM clientes WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
