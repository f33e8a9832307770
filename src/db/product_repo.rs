// src/db/product_repo.rs

use rust_decimal::Decimal;
use sqlx::MySqlConnection;

use crate::{
    common::{
        db_utils::{PER_PAGE, offset, total_pages},
        error::AppError,
    },
    models::product::Producto,
};

pub struct ProductRepository;

impl ProductRepository {
    // Página fixa de 10 linhas, mais recentes primeiro. Devolve também o
    // total de páginas para a navegação do template.
    pub async fn list(
        conn: &mut MySqlConnection,
        page: i64,
    ) -> Result<(Vec<Producto>, i64), AppError> {
        let productos = sqlx::query_as::<_, Producto>(
            "SELECT id, nombre, descripcion, precio, categoria, fecha_creacion \
             FROM productos ORDER BY fecha_creacion DESC LIMIT ? OFFSET ?",
        )
        .bind(PER_PAGE)
        .bind(offset(page))
        .fetch_all(&mut *conn)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos")
            .fetch_one(&mut *conn)
            .await?;

        Ok((productos, total_pages(total)))
    }

    pub async fn find_by_id(
        conn: &mut MySqlConnection,
        id: i64,
    ) -> Result<Option<Producto>, AppError> {
        let maybe_producto = sqlx::query_as::<_, Producto>(
            "SELECT id, nombre, descripcion, precio, categoria, fecha_creacion \
             FROM productos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(maybe_producto)
    }

    // fecha_creacion fica por conta do DEFAULT do schema.
    pub async fn create(
        conn: &mut MySqlConnection,
        nombre: &str,
        descripcion: &str,
        precio: Decimal,
        categoria: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO productos (nombre, descripcion, precio, categoria) VALUES (?, ?, ?, ?)",
        )
        .bind(nombre)
        .bind(descripcion)
        .bind(precio)
        .bind(categoria)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    pub async fn update(
        conn: &mut MySqlConnection,
        id: i64,
        nombre: &str,
        descripcion: &str,
        precio: Decimal,
        categoria: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE productos SET nombre = ?, descripcion = ?, precio = ?, categoria = ? \
             WHERE id = ?",
        )
        .bind(nombre)
        .bind(descripcion)
        .bind(precio)
        .bind(categoria)
        .bind(id)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    // Apagar um id inexistente não é erro: zero linhas afetadas conta
    // como sucesso.
    pub async fn delete(conn: &mut MySqlConnection, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM productos WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
