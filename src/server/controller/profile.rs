use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        profile::{CreateProfileDto, FullProfileDto, ProfileDto, UpdateProfileDto},
    },
    server::{error::Error, model::app::AppState, service::profile::ProfileService},
};

pub static PROFILE_TAG: &str = "profile";

/// Get the most recently created profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Success when retrieving the profile", body = ProfileDto),
        (status = 404, description = "No profile has been created", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let profile_service = ProfileService::new(&state.db);

    let profile = profile_service.get_latest().await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Create a profile
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = CreateProfileDto,
    responses(
        (status = 201, description = "Profile created", body = ProfileDto),
        (status = 400, description = "Name or email missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(payload): Json<CreateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let profile_service = ProfileService::new(&state.db);

    let profile = profile_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Update the provided fields of a profile
#[utoipa::path(
    put,
    path = "/api/profile/{id}",
    tag = PROFILE_TAG,
    params(("id" = i32, Path, description = "Profile ID")),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ProfileDto),
        (status = 400, description = "Name or email provided but empty", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<i32>,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let profile_service = ProfileService::new(&state.db);

    let profile = profile_service.update(profile_id, payload).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Get a profile with its skills, projects and work experience
#[utoipa::path(
    get,
    path = "/api/profile/{id}/full",
    tag = PROFILE_TAG,
    params(("id" = i32, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Success when building the full profile", body = FullProfileDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_full_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let profile_service = ProfileService::new(&state.db);

    let full_profile = profile_service.get_full(profile_id).await?;

    Ok((StatusCode::OK, Json(full_profile)))
}
