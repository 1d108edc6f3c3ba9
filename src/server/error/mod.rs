//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every controller and
//! service. It wraps the domain-specific error enums and implements
//! `IntoResponse` so handlers can simply bubble errors with `?`. Storage
//! failures keep their own response body ("storage error") so that a broken
//! database is never mistaken for an empty result set.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error. Delegates to
    /// `AuthError::into_response()` for status code mapping (401/403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM. Results in 500 with a
    /// "storage error" body; details are logged server-side only.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected internal inconsistency (corrupt stored data, etc.).
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Cron scheduler error from the housekeeping job.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found (missing or soft-deleted). Results in 404.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or semantically invalid request input. Results in 400.
    #[error("{0}")]
    BadRequest(String),

    /// State collision: duplicate room number, duplicate room type, or a
    /// booking overlapping an existing one. Results in 409.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with a custom message. The message is logged;
    /// the client receives a generic body.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!("storage error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "storage error".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response with a
/// generic body, logging the full message server-side.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
