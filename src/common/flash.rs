// src/common/flash.rs
//
// Aviso "one-shot" (flash message): gravado em um cookie no redirect e
// descartado na primeira leitura. O valor vai percent-encoded porque as
// mensagens carregam espaços e acentos, que não são válidos em cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flash {
    pub categoria: FlashCategory,
    pub mensagem: String,
}

impl Flash {
    pub fn success(mensagem: impl Into<String>) -> Self {
        Self { categoria: FlashCategory::Success, mensagem: mensagem.into() }
    }

    pub fn warning(mensagem: impl Into<String>) -> Self {
        Self { categoria: FlashCategory::Warning, mensagem: mensagem.into() }
    }

    pub fn danger(mensagem: impl Into<String>) -> Self {
        Self { categoria: FlashCategory::Danger, mensagem: mensagem.into() }
    }
}

/// Grava o aviso no jar, para ser exibido na próxima página renderizada.
pub fn set_flash(jar: CookieJar, flash: &Flash) -> CookieJar {
    // Serializar um Flash nunca falha; o unwrap_or_default é só formalidade.
    let json = serde_json::to_string(flash).unwrap_or_default();
    let encoded = utf8_percent_encode(&json, NON_ALPHANUMERIC).to_string();

    let cookie = Cookie::build((FLASH_COOKIE, encoded))
        .path("/")
        .http_only(true)
        .build();
    jar.add(cookie)
}

/// Consome o aviso pendente, se houver. O cookie é removido no mesmo
/// response, garantindo a semântica de exibir uma única vez.
pub fn take_flash(jar: CookieJar) -> (Option<Flash>, CookieJar) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (None, jar);
    };

    // Cookie corrompido também é descartado, senão ele fica preso no browser.
    let flash = percent_decode_str(cookie.value())
        .decode_utf8()
        .ok()
        .and_then(|decoded| serde_json::from_str::<Flash>(&decoded).ok());

    let removal = Cookie::build((FLASH_COOKIE, "")).path("/").build();
    (flash, jar.remove(removal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_accents_and_spaces() {
        let aviso = Flash::success("Cliente adicionado com sucesso, não é? Sim!");
        let jar = set_flash(CookieJar::new(), &aviso);

        let (taken, _jar) = take_flash(jar);
        assert_eq!(taken, Some(aviso));
    }

    #[test]
    fn taking_removes_the_cookie() {
        let jar = set_flash(CookieJar::new(), &Flash::warning("aviso"));
        let (taken, jar) = take_flash(jar);
        assert!(taken.is_some());
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn absent_or_corrupt_cookie_yields_none() {
        let (none, jar) = take_flash(CookieJar::new());
        assert!(none.is_none());

        let jar = jar.add(Cookie::new(FLASH_COOKIE, "n%C3%A3o-%C3%A9-json"));
        let (still_none, _jar) = take_flash(jar);
        assert!(still_none.is_none());
    }
}
