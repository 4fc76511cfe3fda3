//! Error types for the showcase server.
//!
//! Each domain error converts into an HTTP response on its own. Anything without a specific
//! mapping (database failures, I/O during startup) is logged and reported to the client as a
//! generic 500 so internal details never leak into responses.

pub mod config;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, not_found::NotFoundError, validation::ValidationError},
};

/// Main error type for the showcase server.
///
/// Services return this type so controllers can propagate with `?` and let the
/// `IntoResponse` implementation pick the status code.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request payload or query failed validation, maps to 400.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Addressed record does not exist, maps to 404.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failure binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error message and returns a generic "Internal server error" body.
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
