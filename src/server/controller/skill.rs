use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        skill::{CreateSkillDto, SkillDto, SkillUsageDto},
    },
    server::{error::Error, model::app::AppState, service::skill::SkillService},
};

pub static SKILL_TAG: &str = "skill";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopSkillsParams {
    /// Maximum number of rows, defaults to 10 when missing or not a positive integer
    pub limit: Option<String>,
}

/// List skill usage counts grouped by name and proficiency
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = SKILL_TAG,
    responses(
        (status = 200, description = "Success when listing skill usage", body = Vec<SkillUsageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_skills(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let skill_service = SkillService::new(&state.db);

    let skills = skill_service.list_usage().await?;

    Ok((StatusCode::OK, Json(skills)))
}

/// List the top skill usage rows ordered by proficiency then usage count
#[utoipa::path(
    get,
    path = "/api/skills/top",
    tag = SKILL_TAG,
    params(TopSkillsParams),
    responses(
        (status = 200, description = "Success when listing top skills", body = Vec<SkillUsageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_skills(
    State(state): State<AppState>,
    Query(params): Query<TopSkillsParams>,
) -> Result<impl IntoResponse, Error> {
    let skill_service = SkillService::new(&state.db);

    let skills = skill_service.top(params.limit.as_deref()).await?;

    Ok((StatusCode::OK, Json(skills)))
}

/// Add a skill to a profile
#[utoipa::path(
    post,
    path = "/api/skills",
    tag = SKILL_TAG,
    request_body = CreateSkillDto,
    responses(
        (status = 201, description = "Skill created", body = SkillDto),
        (status = 400, description = "Profile ID or skill name missing, or unknown proficiency", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_skill(
    State(state): State<AppState>,
    Json(payload): Json<CreateSkillDto>,
) -> Result<impl IntoResponse, Error> {
    let skill_service = SkillService::new(&state.db);

    let skill = skill_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(skill)))
}
