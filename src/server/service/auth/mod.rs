//! Authentication service: registration, login, refresh rotation, logout.
//!
//! Access tokens are short-lived JWTs signed by [`token::TokenService`];
//! refresh tokens are opaque random strings stored hashed, rotated on every
//! use, and revocable per token or per account (via the account's token
//! version).

pub mod token;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use entity::enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{LoginDto, RegisterDto},
    server::{
        data::{refresh_token::RefreshTokenRepository, user::UserRepository},
        error::{auth::AuthError, internal::InternalError, AppError},
        model::{
            auth::IssuedTokens,
            user::{CreateUserParam, User},
        },
    },
};

use token::TokenService;

const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    refresh_ttl_days: i64,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, refresh_ttl_days: i64) -> Self {
        Self {
            db,
            tokens,
            refresh_ttl_days,
        }
    }

    /// Creates an account and signs it in. The caller decides the role
    /// (guest for ordinary registrations, admin when the one-time setup
    /// code was presented and consumed).
    pub async fn register(&self, dto: RegisterDto, role: UserRole) -> Result<IssuedTokens, AppError> {
        let email = dto.email.trim().to_lowercase();

        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if dto.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_taken(&email).await? {
            return Err(AppError::Conflict(format!(
                "An account with email '{}' already exists",
                email
            )));
        }

        let user = user_repo
            .create(CreateUserParam {
                email,
                name: dto.name.trim().to_string(),
                password_hash: hash_password(&dto.password)?,
                role,
            })
            .await?;

        self.issue_tokens(user).await
    }

    /// Verifies credentials and issues a fresh token pair.
    pub async fn login(&self, dto: LoginDto) -> Result<IssuedTokens, AppError> {
        let email = dto.email.trim().to_lowercase();

        let user_repo = UserRepository::new(self.db);
        let Some(entity) = user_repo.find_credentials_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&dto.password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue_tokens(User::from_entity(entity)).await
    }

    /// Redeems a refresh token for a new pair, rotating the stored token:
    /// the presented token is revoked in the same step, so each one works
    /// exactly once.
    pub async fn refresh(&self, refresh_token: &str) -> Result<IssuedTokens, AppError> {
        let token_repo = RefreshTokenRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let hash = token::hash_refresh_token(refresh_token);
        let Some(stored) = token_repo.find_by_hash(&hash).await? else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        if stored.revoked_at.is_some() || stored.expires_at <= Utc::now() {
            return Err(AuthError::InvalidRefreshToken.into());
        }

        let Some(user) = user_repo.find_by_id(stored.user_id).await? else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        token_repo.revoke(stored.id).await?;

        self.issue_tokens(user).await
    }

    /// Revokes the presented refresh token. Unknown tokens are ignored so
    /// logout is idempotent.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let token_repo = RefreshTokenRepository::new(self.db);

        let hash = token::hash_refresh_token(refresh_token);
        if let Some(stored) = token_repo.find_by_hash(&hash).await? {
            token_repo.revoke(stored.id).await?;
        }

        Ok(())
    }

    async fn issue_tokens(&self, user: User) -> Result<IssuedTokens, AppError> {
        let access_token = self.tokens.issue(&user)?;

        let refresh_token = token::generate_refresh_token();
        let expires_at = Utc::now() + Duration::days(self.refresh_ttl_days);

        RefreshTokenRepository::new(self.db)
            .insert(user.id, token::hash_refresh_token(&refresh_token), expires_at)
            .await?;

        Ok(IssuedTokens {
            access_token,
            refresh_token,
            expires_in: self.tokens.access_ttl_secs(),
            user,
        })
    }
}

/// Hashes a password with Argon2id and a fresh salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()).into())
}

/// Verifies a password against a stored hash. A malformed stored hash is an
/// internal error, not a failed login.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
