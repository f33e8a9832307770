// src/handlers/products.rs

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::{
    common::{
        db_utils::{clamp_page, get_connection},
        flash::{Flash, set_flash, take_flash},
    },
    config::AppState,
    db::ProductRepository,
    models::auth::SesionUsuario,
};

// `page` fica cru aqui: valor não numérico coage para a página 1 no
// clamp_page, em vez de derrubar a requisição com 400.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

// Campos do formulário, na mesma ordem das colunas graváveis do schema.
// Os valores são confiados como vieram; quem valida é o banco.
#[derive(Debug, Deserialize)]
pub struct ProductoPayload {
    pub nombre: String,
    pub descripcion: String,
    pub precio: Decimal,
    pub categoria: String,
}

// GET /productos
pub async fn list_products(
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
                    "productos": [], "page": page, "total_pages": 1, "flash": flash,
                })),
            )
                .into_response();
        }
    };

    match ProductRepository::list(&mut conn, page).await {
        Ok((productos, total_pages)) => (
            jar,
            Json(json!({
                "productos": productos, "page": page, "total_pages": total_pages, "flash": flash,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Erro ao obter produtos: {}", e);
            let flash = Flash::danger("Erro ao obter produtos.");
            (
                jar,
                Json(json!({
                    "productos": [], "page": page, "total_pages": 1, "flash": flash,
                })),
            )
                .into_response()
        }
    }
}

// GET /add_producto — contexto do formulário
pub async fn new_product_page(_session: SesionUsuario, jar: CookieJar) -> impl IntoResponse {
    let (flash, jar) = take_flash(jar);
    (jar, Json(json!({ "flash": flash })))
}

// POST /add_producto
pub async fn create_product(
    State(app_state): State<AppState>,
    _session: SesionUsuario,
    jar: CookieJar,
    Form(payload): Form<ProductoPayload>,
) -> Response {
    let mut conn = match get_connection(&app_state).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Sem conexão com o banco de dados: {}", e);
            let jar = set_flash(jar, &Flash::danger("Erro ao conectar ao banco de dados."));
            return (jar, Redirect::to("/productos")).into_response();
        }
    };

    let flash = match ProductRepository::create(
        &mut conn,
        &payload.nombre,
        &payload.descripcion,
        payload.precio,
        &payload.categoria,
    )
    .await
    {
        Ok(()) => Flash::success("Produto adicionado com sucesso!"),
        Err(e) => {
            tracing::error!("Erro ao adicionar produto: {}", e);
            Flash::danger("Erro ao adicionar produto.")
        }
    };

    let jar = set_flash(jar, &flash);
    (jar, Redirect::to("/productos")).into_response()
}

// GET /edit_producto/{id} — busca o registro para o formulário.
// Id inexistente devolve "producto": null; o template decide como exibir.
pub async fn edit_product_page(
    State(app_state): State<AppState>,
    _session: SesionUsuario,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Response {
    let (flash, jar) = take_flash(jar);

    let mut conn = match get_connection(&app_state).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Sem conexão com o banco de dados: {}", e);
            let jar = set_flash(jar, &Flash::danger("Erro ao conectar ao banco de dados."));
            return (jar, Redirect::to("/productos")).into_response();
        }
    };

    match ProductRepository::find_by_id(&mut conn, id).await {
        Ok(producto) => {
            (jar, Json(json!({ "producto": producto, "flash": flash }))).into_response()
        }
        Err(e) => {
            tracing::error!("Erro ao obter produto {}: {}", id, e);
            let flash = Flash::danger("Erro ao obter produto.");
            (jar, Json(json!({ "producto": null, "flash": flash }))).into_response()
        }
    }
}

// POST /edit_producto/{id} — update de linha inteira, last-writer-wins.
pub async fn update_product(
    State(app_state): State<AppState>,
    _session: SesionUsuario,
    jar: CookieJar,
    Path(id): Path<i64>,
    Form(payload): Form<ProductoPayload>,
) -> Response {
    let mut conn = match get_connection(&app_state).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Sem conexão com o banco de dados: {}", e);
            let jar = set_flash(jar, &Flash::danger("Erro ao conectar ao banco de dados."));
            return (jar, Redirect::to("/productos")).into_response();
        }
    };

    let flash = match ProductRepository::update(
        &mut conn,
        id,
        &payload.nombre,
        &payload.descripcion,
        payload.precio,
        &payload.categoria,
    )
    .await
    {
        Ok(()) => Flash::success("Produto atualizado com sucesso!"),
        Err(e) => {
            tracing::error!("Erro ao atualizar produto {}: {}", id, e);
            Flash::danger("Erro ao atualizar produto.")
        }
    };

    let jar = set_flash(jar, &flash);
    (jar, Redirect::to("/productos")).into_response()
}

// GET /delete_producto/{id}
pub async fn delete_product(
    State(app_state): State<AppState>,
    _session: SesionUsuario,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Response {
    let mut conn = match get_connection(&app_state).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Sem conexão com o banco de dados: {}", e);
            let jar = set_flash(jar, &Flash::danger("Erro ao conectar ao banco de dados."));
            return (jar, Redirect::to("/productos")).into_response();
        }
    };

    let flash = match ProductRepository::delete(&mut conn, id).await {
        Ok(()) => Flash::success("Produto eliminado com sucesso!"),
        Err(e) => {
            tracing::error!("Erro ao eliminar produto {}: {}", id, e);
            Flash::danger("Erro ao eliminar produto.")
        }
    };

    let jar = set_flash(jar, &flash);
    (jar, Redirect::to("/productos")).into_response()
}
