use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        project::{CreateProjectDto, ProjectDto, ProjectWithSkillsDto, UpdateProjectDto},
    },
    server::{error::Error, model::app::AppState, service::project::ProjectService},
};

pub static PROJECT_TAG: &str = "project";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectFilterParams {
    /// Comma-separated skill tags, a project matches if it has any of them
    pub skill: Option<String>,
}

/// List projects newest first, optionally filtered by skill tag
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    params(ProjectFilterParams),
    responses(
        (status = 200, description = "Success when listing projects", body = Vec<ProjectWithSkillsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let project_service = ProjectService::new(&state.db);

    let projects = project_service.list(params.skill.as_deref()).await?;

    Ok((StatusCode::OK, Json(projects)))
}

/// Get a single project with its skill tags
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Success when retrieving the project", body = ProjectWithSkillsDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let project_service = ProjectService::new(&state.db);

    let project = project_service.get(project_id).await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Create a project with optional skill tags
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = ProjectWithSkillsDto),
        (status = 400, description = "Profile ID or title missing", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let project_service = ProjectService::new(&state.db);

    let project = project_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Update the provided fields of a project
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Title provided but empty", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
    Json(payload): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let project_service = ProjectService::new(&state.db);

    let project = project_service.update(project_id, payload).await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Delete a project and its skill tags
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = MessageDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let project_service = ProjectService::new(&state.db);

    project_service.delete(project_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Project deleted successfully".to_string(),
        }),
    ))
}
