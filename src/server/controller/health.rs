use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use dioxus_logger::tracing;

use crate::{model::api::HealthDto, server::model::app::AppState};

pub static HEALTH_TAG: &str = "health";

/// Check that the server is up and the database answers
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server and database are reachable", body = HealthDto),
        (status = 500, description = "Database connection failed", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "ok".to_string(),
                timestamp: Some(Utc::now()),
                database: Some("connected".to_string()),
                message: None,
            }),
        ),
        Err(e) => {
            tracing::error!("Health check failed to reach database: {}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthDto {
                    status: "error".to_string(),
                    timestamp: None,
                    database: None,
                    message: Some("Database connection failed".to_string()),
                }),
            )
        }
    }
}
