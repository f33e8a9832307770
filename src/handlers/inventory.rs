// src/handlers/inventory.rs

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::{
    common::{
        db_utils::{clamp_page, get_connection},
        flash::{Flash, take_flash},
    },
    config::AppState,
    db::InventoryRepository,
    handlers::products::PageQuery,
    models::auth::SesionUsuario,
};

// GET /inventario — somente leitura; cada linha já vem com producto_nombre
// pelo JOIN no repositório.
pub async fn list_inventory(
    State(app_state): State<AppState>,
    _session: SesionUsuario,
    jar: CookieJar,
    Query(query): Query<PageQuery>,
) -> Response {
    let (flash, jar) = take_flash(jar);
    let page = clamp_page(query.page.as_deref());

    let mut conn = match get_connection(&app_state).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Sem conexão com o banco de dados: {}", e);
            let flash = Flash::danger("Erro ao conectar ao banco de dados.");
            return (
                jar,
                Json(json!({
                    "inventario": [], "page": page, "total_pages": 1, "flash": flash,
                })),
            )
                .into_response();
        }
    };

    match InventoryRepository::list(&mut conn, page).await {
        Ok((inventario, total_pages)) => (
            jar,
            Json(json!({
                "inventario": inventario, "page": page, "total_pages": total_pages, "flash": flash,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Erro ao obter inventário: {}", e);
            let flash = Flash::danger("Erro ao obter inventário.");
            (
                jar,
                Json(json!({
                    "inventario": [], "page": page, "total_pages": 1, "flash": flash,
                })),
            )
                .into_response()
        }
    }
}
