use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use entity::enums::UserRole;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RefreshDto, RegisterDto, TokenPairDto},
        user::UserDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Ordinary registrations create guest accounts. When the request carries
/// the one-time setup code printed to the server log on first start, the
/// account is created as the initial admin instead.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and signed in", body = TokenPairDto),
        (status = 400, description = "Invalid email, password, or name", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let role = match payload.setup_code.as_deref() {
        Some(code) if state.setup_codes.validate_and_consume(code).await => UserRole::Admin,
        Some(_) => {
            return Err(AppError::BadRequest(
                "Invalid or expired setup code".to_string(),
            ))
        }
        None => UserRole::Guest,
    };

    let tokens = AuthService::new(&state.db, &state.tokens, state.refresh_token_ttl_days)
        .register(payload, role)
        .await?;

    Ok((StatusCode::CREATED, Json(tokens.into_dto())))
}

/// Sign in with email and password.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = TokenPairDto),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.tokens, state.refresh_token_ttl_days)
        .login(payload)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Exchange a refresh token for a fresh token pair.
///
/// The presented token is revoked in the same step (rotation); replaying it
/// afterwards fails.
#[utoipa::path(
    post,
    path = "/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "New token pair issued", body = TokenPairDto),
        (status = 401, description = "Unknown, expired, or revoked refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.tokens, state.refresh_token_ttl_days)
        .refresh(&payload.refresh_token)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Revoke a refresh token. Idempotent: revoking an unknown token succeeds.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 204, description = "Token revoked"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.tokens, state.refresh_token_ttl_days)
        .logout(&payload.refresh_token)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// The authenticated account behind the presented access token.
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current account", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
