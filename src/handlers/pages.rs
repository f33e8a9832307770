// src/handlers/pages.rs

use axum::{Json, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::{common::flash::take_flash, models::auth::SesionUsuario};

// GET / (protegida) — payload da página inicial
pub async fn index(session: SesionUsuario, jar: CookieJar) -> impl IntoResponse {
    let (flash, jar) = take_flash(jar);
    (jar, Json(json!({ "username": session.username, "flash": flash })))
}

// GET /about (pública)
pub async fn about() -> impl IntoResponse {
    Json(json!({
        "titulo": "Sobre",
        "descricao": "Gestão de produtos, clientes e inventário.",
    }))
}
