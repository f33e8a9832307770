// src/models/inventory.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

// Linha do inventário já com o JOIN em 'productos': cada registro carrega
// o nome do produto referenciado (producto_nombre).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InventarioItem {
    pub id: i64,
    pub producto_id: i64,
    pub cantidad: i32,
    pub estado: Option<String>,
    pub fecha_actualizacion: DateTime<Utc>,
    pub producto_nombre: String,
}
