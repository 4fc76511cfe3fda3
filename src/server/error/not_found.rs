use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum NotFoundError {
    #[error("Profile ID {0} not found")]
    Profile(i32),
    #[error("No profile has been created yet")]
    NoProfile,
    #[error("Project ID {0} not found")]
    Project(i32),
}

impl NotFoundError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Profile(_) | Self::NoProfile => Self::not_found("Profile not found"),
            Self::Project(_) => Self::not_found("Project not found"),
        }
    }
}
