use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// The access token failed signature or claim validation, or expired.
    #[error("Invalid or expired access token")]
    InvalidToken,

    /// The token's version no longer matches the account's token_version,
    /// i.e. every token issued before the bump has been revoked.
    #[error("Access token has been revoked for user {0}")]
    TokenRevoked(i32),

    /// The refresh token is unknown, expired, or already revoked.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Login with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A valid token references an account that no longer exists (or was
    /// soft-deleted after issuance).
    #[error("Authenticated user {0} not found in database")]
    UserNotInDatabase(i32),

    /// The account exists but its role does not grant the operation.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Maps authentication errors onto 401/403 responses. Client-facing
/// messages stay generic; the precise variant is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("auth error: {}", self);

        match self {
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            _ => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
