// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

// Linha da tabela 'clientes'.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cliente {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_registro: DateTime<Utc>,
}
