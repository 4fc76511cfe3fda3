use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, search::SearchResponseDto},
    server::{error::Error, model::app::AppState, service::search::SearchService},
};

pub static SEARCH_TAG: &str = "search";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring to look for
    pub q: Option<String>,
}

/// Search projects, skills and work experience
#[utoipa::path(
    get,
    path = "/api/search",
    tag = SEARCH_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Search results", body = SearchResponseDto),
        (status = 400, description = "Search query missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let search_service = SearchService::new(&state.db);

    let response = search_service.search(params.q.as_deref()).await?;

    Ok((StatusCode::OK, Json(response)))
}
