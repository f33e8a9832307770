// src/db/inventory_repo.rs

use sqlx::MySqlConnection;

use crate::{
    common::{
        db_utils::{PER_PAGE, offset, total_pages},
        error::AppError,
    },
    models::inventory::InventarioItem,
};

// Inventário é somente leitura: o estoque é mutado por um processo externo.
// A listagem sempre vem com o JOIN em 'productos' para carregar o nome.
pub struct InventoryRepository;

impl InventoryRepository {
    pub async fn list(
        conn: &mut MySqlConnection,
        page: i64,
    ) -> Result<(Vec<InventarioItem>, i64), AppError> {
        let inventario = sqlx::query_as::<_, InventarioItem>(
            "SELECT i.id, i.producto_id, i.cantidad, i.estado, i.fecha_actualizacion, \
                    p.nombre AS producto_nombre \
             FROM inventario i \
             INNER JOIN productos p ON i.producto_id = p.id \
             ORDER BY i.fecha_actualizacion DESC LIMIT ? OFFSET ?",
        )
        .bind(PER_PAGE)
        .bind(offset(page))
        .fetch_all(&mut *conn)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM inventario i INNER JOIN productos p ON i.producto_id = p.id",
        )
        .fetch_one(&mut *conn)
        .await?;

        Ok((inventario, total_pages(total)))
    }
}
