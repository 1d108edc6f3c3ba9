//! Token claims and issued-credential models for the authentication flow.

use serde::{Deserialize, Serialize};

use crate::{model::auth::TokenPairDto, server::model::user::User};

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i32,
    /// Role at issuance time; authorization re-checks the database row, so
    /// this is informational.
    pub role: String,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Unique token id.
    pub jti: String,
    /// The account's token_version at issuance; a mismatch against the
    /// current row means the token was revoked.
    pub tv: i32,
}

/// Freshly issued access/refresh pair together with the account it belongs
/// to.
#[derive(Debug, Clone)]
pub struct IssuedTokens {
    pub access_token: String,
    /// Opaque refresh token plaintext; only its hash is persisted.
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: User,
}

impl IssuedTokens {
    pub fn into_dto(self) -> TokenPairDto {
        TokenPairDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.expires_in,
            user: self.user.into_dto(),
        }
    }
}
