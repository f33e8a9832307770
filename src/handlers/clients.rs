// src/handlers/clients.rs

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;

use crate::{
    common::{
        db_utils::{clamp_page, get_connection},
        flash::{Flash, set_flash, take_flash},
    },
    config::AppState,
    db::ClientRepository,
    handlers::products::PageQuery,
    models::auth::SesionUsuario,
};

#[derive(Debug, Deserialize)]
pub struct ClientePayload {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
}

// GET /clientes
pub async fn list_clients(
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
                    "clientes": [], "page": page, "total_pages": 1, "flash": flash,
                })),
            )
                .into_response();
        }
    };

    match ClientRepository::list(&mut conn, page).await {
        Ok((clientes, total_pages)) => (
            jar,
            Json(json!({
                "clientes": clientes, "page": page, "total_pages": total_pages, "flash": flash,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Erro ao obter clientes: {}", e);
            let flash = Flash::danger("Erro ao obter clientes.");
            (
                jar,
                Json(json!({
                    "clientes": [], "page": page, "total_pages": 1, "flash": flash,
                })),
            )
                .into_response()
        }
    }
}

// GET /add_cliente — contexto do formulário
pub async fn new_client_page(_session: SesionUsuario, jar: CookieJar) -> impl IntoResponse {
    let (flash, jar) = take_flash(jar);
    (jar, Json(json!({ "flash": flash })))
}

// POST /add_cliente
pub async fn create_client(
    State(app_state): State<AppState>,
    _session: SesionUsuario,
    jar: CookieJar,
    Form(payload): Form<ClientePayload>,
) -> Response {
    let mut conn = match get_connection(&app_state).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Sem conexão com o banco de dados: {}", e);
            let jar = set_flash(jar, &Flash::danger("Erro ao conectar ao banco de dados."));
            return (jar, Redirect::to("/clientes")).into_response();
        }
    };

    let flash = match ClientRepository::create(
        &mut conn,
        &payload.nombre,
        &payload.email,
        &payload.telefono,
        &payload.direccion,
    )
    .await
    {
        Ok(()) => Flash::success("Cliente adicionado com sucesso!"),
        Err(e) => {
            tracing::error!("Erro ao adicionar cliente: {}", e);
            Flash::danger("Erro ao adicionar cliente.")
        }
    };

    let jar = set_flash(jar, &flash);
    (jar, Redirect::to("/clientes")).into_response()
}

// GET /edit_cliente/{id}
pub async fn edit_client_page(
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
            return (jar, Redirect::to("/clientes")).into_response();
        }
    };

    match ClientRepository::find_by_id(&mut conn, id).await {
        Ok(cliente) => (jar, Json(json!({ "cliente": cliente, "flash": flash }))).into_response(),
        Err(e) => {
            tracing::error!("Erro ao obter cliente {}: {}", id, e);
            let flash = Flash::danger("Erro ao obter cliente.");
            (jar, Json(json!({ "cliente": null, "flash": flash }))).into_response()
        }
    }
}

// POST /edit_cliente/{id}
pub async fn update_client(
    State(app_state): State<AppState>,
    _session: SesionUsuario,
    jar: CookieJar,
    Path(id): Path<i64>,
    Form(payload): Form<ClientePayload>,
) -> Response {
    let mut conn = match get_connection(&app_state).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Sem conexão com o banco de dados: {}", e);
            let jar = set_flash(jar, &Flash::danger("Erro ao conectar ao banco de dados."));
            return (jar, Redirect::to("/clientes")).into_response();
        }
    };

    let flash = match ClientRepository::update(
        &mut conn,
        id,
        &payload.nombre,
        &payload.email,
        &payload.telefono,
        &payload.direccion,
    )
    .await
    {
        Ok(()) => Flash::success("Cliente atualizado com sucesso!"),
        Err(e) => {
            tracing::error!("Erro ao atualizar cliente {}: {}", id, e);
            Flash::danger("Erro ao atualizar cliente.")
        }
    };

    let jar = set_flash(jar, &flash);
    (jar, Redirect::to("/clientes")).into_response()
}

// GET /delete_cliente/{id}
pub async fn delete_client(
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
            return (jar, Redirect::to("/clientes")).into_response();
        }
    };

    let flash = match ClientRepository::delete(&mut conn, id).await {
        Ok(()) => Flash::success("Cliente eliminado com sucesso!"),
        Err(e) => {
            tracing::error!("Erro ao eliminar cliente {}: {}", id, e);
            Flash::danger("Erro ao eliminar cliente.")
        }
    };

    let jar = set_flash(jar, &flash);
    (jar, Redirect::to("/clientes")).into_response()
}
