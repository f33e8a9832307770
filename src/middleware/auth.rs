// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{
    common::{
        error::AppError,
        flash::{Flash, set_flash},
    },
    config::AppState,
    models::auth::SesionUsuario,
};

pub const SESSION_COOKIE: &str = "session";

// O guard de sessão: dois estados possíveis (anônimo/autenticado).
//
// Cookie válido e não expirado -> a identidade vai para as extensions e o
// handler roda. Qualquer outra coisa -> curto-circuito com aviso e redirect
// para o login; o repositório nunca é alcançado.
pub async fn auth_guard(
    State(app_state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let session_cookie = jar.get(SESSION_COOKIE);

    if let Some(cookie) = &session_cookie {
        if let Ok(session) = app_state.auth_service.decode_session(cookie.value()) {
            request.extensions_mut().insert(session);
            return next.run(request).await;
        }
    }

    let mut response_jar = set_flash(
        CookieJar::new(),
        &Flash::warning("Você precisa iniciar sessão para acessar esta página."),
    );

    // Token morto (expirado ou adulterado) é descartado junto com o
    // redirect; senão o browser reenvia o cookie inválido a cada requisição.
    if session_cookie.is_some() {
        let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
        response_jar = response_jar.remove(removal);
    }

    (response_jar, Redirect::to("/login")).into_response()
}

// Extrator para os handlers receberem a identidade de forma explícita,
// em vez de pescarem em estado global.
impl<S> FromRequestParts<S> for SesionUsuario
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SesionUsuario>()
            .cloned()
            .ok_or(AppError::InvalidSession)
    }
}
