use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    auth::entities::JwtClaim,
    common::{AuthConfig, entities::app_errors::CoreError},
};

pub fn hash_password(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            error!("Failed to hash password: {}", e);
            CoreError::InternalServerError
        })?;

    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, CoreError> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!("Stored password hash is malformed: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Issues and verifies HS256 access tokens.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            ttl_seconds: config.token_ttl_seconds,
        }
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, CoreError> {
        let now = Utc::now().timestamp();
        let claims = JwtClaim {
            sub: user_id,
            iat: now,
            exp: now + self.ttl_seconds,
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            error!("Failed to encode access token: {}", e);
            CoreError::InternalServerError
        })
    }

    pub fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        jsonwebtoken::decode::<JwtClaim>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => CoreError::TokenExpired,
            _ => CoreError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(ttl_seconds: i64) -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_seconds: ttl_seconds,
        })
    }

    #[test]
    fn password_hash_verifies_and_rejects() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn token_round_trip() {
        let service = service(3600);
        let user_id = Uuid::new_v4();
        let token = service.issue(user_id).unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = service(-3600);
        let token = service.issue(Uuid::new_v4()).unwrap();
        assert_eq!(service.verify(&token), Err(CoreError::TokenExpired));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = service(3600).issue(Uuid::new_v4()).unwrap();
        let other = TokenService::new(&AuthConfig {
            jwt_secret: "other-secret".to_string(),
            token_ttl_seconds: 3600,
        });
        assert_eq!(other.verify(&token), Err(CoreError::InvalidToken));
    }
}
