// src/handlers/auth.rs

use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::json;

use crate::{
    common::{
        db_utils::get_connection,
        flash::{Flash, set_flash, take_flash},
    },
    config::AppState,
    middleware::auth::SESSION_COOKIE,
};

#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

// GET /register — contexto da página de registro
pub async fn register_page(jar: CookieJar) -> impl IntoResponse {
    let (flash, jar) = take_flash(jar);
    (jar, Json(json!({ "flash": flash })))
}

// POST /register
pub async fn register(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(payload): Form<RegisterPayload>,
) -> Response {
    let mut conn = match get_connection(&app_state).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Sem conexão com o banco de dados: {}", e);
            let flash = Flash::danger("Erro ao conectar ao banco de dados.");
            return (jar, Json(json!({ "flash": flash }))).into_response();
        }
    };

    match app_state
        .auth_service
        .register_user(&mut conn, &payload.username, &payload.password, &payload.email)
        .await
    {
        Ok(()) => {
            let jar = set_flash(jar, &Flash::success("Usuário registrado com sucesso."));
            (jar, Redirect::to("/login")).into_response()
        }
        Err(e) => {
            // Username duplicado cai aqui também; a página re-renderiza
            // com o aviso, sem redirect.
            tracing::warn!("Falha ao registrar usuário: {}", e);
            let flash = Flash::danger(format!("Erro ao registrar usuário: {}", e));
            (jar, Json(json!({ "flash": flash }))).into_response()
        }
    }
}

// GET /login — contexto da página de login
pub async fn login_page(jar: CookieJar) -> impl IntoResponse {
    let (flash, jar) = take_flash(jar);
    (jar, Json(json!({ "flash": flash })))
}

// POST /login
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(payload): Form<LoginPayload>,
) -> Response {
    let mut conn = match get_connection(&app_state).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Sem conexão com o banco de dados: {}", e);
            let flash = Flash::danger("Erro ao conectar ao banco de dados.");
            return (jar, Json(json!({ "flash": flash }))).into_response();
        }
    };

    match app_state
        .auth_service
        .login_user(&mut conn, &payload.username, &payload.password)
        .await
    {
        Ok(token) => {
            // anônimo -> autenticado: só acontece aqui.
            let session_cookie = Cookie::build((SESSION_COOKIE, token))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();
            let jar = jar.add(session_cookie);
            let jar = set_flash(jar, &Flash::success("Login efetuado com sucesso!"));
            (jar, Redirect::to("/")).into_response()
        }
        Err(crate::common::error::AppError::InvalidCredentials) => {
            let flash = Flash::danger("Usuário ou senha incorretos.");
            (jar, Json(json!({ "flash": flash }))).into_response()
        }
        Err(e) => {
            tracing::error!("Erro no login: {}", e);
            let flash = Flash::danger("Ocorreu um erro inesperado. Tente novamente.");
            (jar, Json(json!({ "flash": flash }))).into_response()
        }
    }
}

// GET /logout (protegida)
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    let jar = jar.remove(removal);
    let jar = set_flash(jar, &Flash::success("Sessão encerrada com sucesso."));
    (jar, Redirect::to("/login"))
}
