// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sqlx::MySqlConnection;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, SesionUsuario},
};

// Validade do token de sessão carregado no cookie.
const SESSION_TTL_HOURS: i64 = 24;

#[derive(Clone)]
pub struct AuthService {
    secret_key: String,
}

impl AuthService {
    pub fn new(secret_key: String) -> Self {
        Self { secret_key }
    }

    // Registro: hash da senha fora do executor async, insert parametrizado.
    pub async fn register_user(
        &self,
        conn: &mut MySqlConnection,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<(), AppError> {
        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        UserRepository::create(conn, username, &hashed_password, email).await
    }

    // Login: usuário inexistente e senha errada respondem igual
    // (InvalidCredentials), sem vazar qual dos dois falhou.
    pub async fn login_user(
        &self,
        conn: &mut MySqlConnection,
        username: &str,
        password: &str,
    ) -> Result<String, AppError> {
        let user = UserRepository::find_by_username(conn, username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password.clone();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_session_token(user.id, &user.username)
    }

    pub fn create_session_token(&self, user_id: i64, username: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(SESSION_TTL_HOURS);

        let claims = Claims {
            sub: user_id,
            username: username.to_owned(),
            iat: now.timestamp() as usize,
            exp: expires_at.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret_key.as_ref()),
        )?)
    }

    // Decodifica o cookie de sessão. Token adulterado, assinado com outra
    // chave ou expirado vira InvalidSession; o guard transforma isso em
    // redirect para o login.
    pub fn decode_session(&self, token: &str) -> Result<SesionUsuario, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_key.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidSession)?;

        Ok(SesionUsuario {
            id: token_data.claims.sub,
            username: token_data.claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Custo baixo só nos testes; DEFAULT_COST deixaria a suíte lenta.
    const TEST_COST: u32 = 4;

    #[test]
    fn password_round_trip() {
        let digest = hash("pw123", TEST_COST).unwrap();
        assert!(verify("pw123", &digest).unwrap());
        assert!(!verify("wrong", &digest).unwrap());
    }

    #[test]
    fn same_password_hashes_differently_but_both_verify() {
        let a = hash("pw123", TEST_COST).unwrap();
        let b = hash("pw123", TEST_COST).unwrap();
        assert_ne!(a, b); // salt diferente a cada chamada
        assert!(verify("pw123", &a).unwrap());
        assert!(verify("pw123", &b).unwrap());
    }

    #[test]
    fn session_token_round_trip() {
        let service = AuthService::new("segredo-de-teste".into());
        let token = service.create_session_token(42, "alice").unwrap();

        let session = service.decode_session(&token).unwrap();
        assert_eq!(session, SesionUsuario { id: 42, username: "alice".into() });
    }

    #[test]
    fn token_signed_with_other_key_is_rejected() {
        let service = AuthService::new("segredo-de-teste".into());
        let intruso = AuthService::new("outra-chave".into());

        let token = intruso.create_session_token(1, "mallory").unwrap();
        assert!(matches!(service.decode_session(&token), Err(AppError::InvalidSession)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = AuthService::new("segredo-de-teste".into());

        let past = Utc::now() - chrono::Duration::hours(2);
        let claims = Claims {
            sub: 7,
            username: "alice".into(),
            iat: (past - chrono::Duration::hours(1)).timestamp() as usize,
            exp: past.timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("segredo-de-teste".as_ref()),
        )
        .unwrap();

        assert!(matches!(service.decode_session(&token), Err(AppError::InvalidSession)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = AuthService::new("segredo-de-teste".into());
        assert!(matches!(service.decode_session("nem-de-longe-um-jwt"), Err(AppError::InvalidSession)));
    }
}
