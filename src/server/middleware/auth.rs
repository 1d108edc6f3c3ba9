//! Bearer-token authentication guard used by every protected endpoint.
//!
//! Controllers build an [`AuthGuard`] from the request headers and call
//! [`AuthGuard::require`] with the permissions the endpoint needs. The
//! guard verifies the JWT, loads the account row, rejects tokens whose
//! version predates a revocation bump, and checks the role hierarchy
//! (admin covers staff, staff covers guest).

use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
};

/// Permission an endpoint can demand on top of plain authentication.
pub enum Permission {
    /// Staff or admin role.
    Staff,
    /// Admin role only.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks every listed permission.
    /// `require(&[])` means "any signed-in user".
    ///
    /// # Returns
    /// - `Ok(User)`: the authenticated account
    /// - `Err(AppError::AuthErr)`: missing/invalid/revoked token or
    ///   insufficient role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.bearer_token()?;
        let claims = self.tokens.verify(token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        if claims.tv != user.token_version {
            return Err(AuthError::TokenRevoked(user.id).into());
        }

        for permission in permissions {
            let required = match permission {
                Permission::Staff => UserRole::Staff,
                Permission::Admin => UserRole::Admin,
            };

            if !user.has_role(required) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("endpoint requires the {:?} role", required),
                )
                .into());
            }
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let header = self
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}
