// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

// Linha da tabela 'productos'. Os nomes dos campos seguem as colunas do
// schema externo para o FromRow mapear direto.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Producto {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: Decimal,
    pub categoria: Option<String>,
    pub fecha_creacion: DateTime<Utc>,
}
