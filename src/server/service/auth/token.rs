//! Access token signing and verification.

use chrono::Utc;
use entity::enums::UserRole;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{auth::Claims, user::User},
};

/// Signs and verifies the short-lived access tokens.
///
/// Holds the HMAC keys derived from the configured secret; cheap to clone
/// and shared through the application state.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &str, access_ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl_secs,
        }
    }

    pub fn access_ttl_secs(&self) -> i64 {
        self.access_ttl_secs
    }

    /// Issues an access token for the user, embedding the current token
    /// version so a later bump revokes it.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.id,
            role: role_name(user.role).to_string(),
            exp: now + self.access_ttl_secs,
            iat: now,
            jti: format!("{:032x}", rand::random::<u128>()),
            tv: user.token_version,
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(crate::server::error::internal::InternalError::TokenSigning)?;

        Ok(token)
    }

    /// Verifies signature and expiry, returning the embedded claims. The
    /// caller still has to check the token version against the account row.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

fn role_name(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "admin",
        UserRole::Staff => "staff",
        UserRole::Guest => "guest",
    }
}

/// Hex SHA-256 of an opaque refresh token; the stored lookup key.
pub fn hash_refresh_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    format!("{:x}", digest)
}

/// Generates a fresh opaque refresh token (hex, 64 characters).
pub fn generate_refresh_token() -> String {
    let a: u128 = rand::random();
    let b: u128 = rand::random();
    format!("{:032x}{:032x}", a, b)
}
