// src/models/auth.rs

use serde::{Deserialize, Serialize};

// Representa uma linha da tabela 'usuarios' (schema externo, nomes em espanhol).
// A coluna 'password' guarda o digest bcrypt, nunca o texto plano.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Usuario {
    pub id: i64,
    pub username: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password: String,

    pub email: String,
}

// Identidade decodificada do cookie de sessão. O guard insere isso nas
// extensions da requisição; os handlers extraem explicitamente.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SesionUsuario {
    pub id: i64,
    pub username: String,
}

// Claims do token de sessão assinado (HS256).
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}
