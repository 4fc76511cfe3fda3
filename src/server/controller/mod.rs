//! HTTP controller endpoints for the portfolio API.
//!
//! Handlers extract path, query and JSON inputs, call the matching service and map the
//! result to a status code. Every handler carries a `utoipa::path` annotation so it shows
//! up in the generated OpenAPI document.

pub mod health;
pub mod profile;
pub mod project;
pub mod search;
pub mod skill;
pub mod work;

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::ErrorDto;

/// Fallback for any path that no route matches
pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Route not found".to_string(),
        }),
    )
}
