use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        work::{CreateWorkExperienceDto, WorkExperienceDto},
    },
    server::{error::Error, model::app::AppState, service::work::WorkExperienceService},
};

pub static WORK_TAG: &str = "work";

/// Add a work experience entry to a profile
#[utoipa::path(
    post,
    path = "/api/work",
    tag = WORK_TAG,
    request_body = CreateWorkExperienceDto,
    responses(
        (status = 201, description = "Work experience created", body = WorkExperienceDto),
        (status = 400, description = "Required field missing", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_work_experience(
    State(state): State<AppState>,
    Json(payload): Json<CreateWorkExperienceDto>,
) -> Result<impl IntoResponse, Error> {
    let work_service = WorkExperienceService::new(&state.db);

    let work = work_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(work)))
}
