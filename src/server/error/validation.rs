use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Name and email are required")]
    MissingProfileFields,
    #[error("Profile ID and title are required")]
    MissingProjectFields,
    #[error("Profile ID and skill name are required")]
    MissingSkillFields,
    #[error("Profile ID, company, position and start date are required")]
    MissingWorkFields,
    #[error("Search query is required")]
    MissingSearchQuery,
    #[error("Invalid proficiency {0:?}, expected one of Beginner, Intermediate, Advanced")]
    InvalidProficiency(String),
    #[error("Field {0} must not be empty")]
    EmptyField(&'static str),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
