//! HTTP routing and OpenAPI documentation configuration.
//!
//! All portfolio endpoints live under `/api`, the health check at `/health`. Routes are
//! registered through utoipa so the OpenAPI document stays in sync with the handlers, and
//! Swagger UI serves it at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/profile`, `POST /api/profile`
/// - `PUT /api/profile/{id}`, `GET /api/profile/{id}/full`
/// - `GET /api/projects`, `POST /api/projects`
/// - `GET /api/projects/{id}`, `PUT /api/projects/{id}`, `DELETE /api/projects/{id}`
/// - `GET /api/skills`, `POST /api/skills`, `GET /api/skills/top`
/// - `GET /api/search`
/// - `POST /api/work`
/// - `GET /health`
///
/// Any other path answers `404 {"error": "Route not found"}`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Showcase", description = "Portfolio content API"), tags(
        (name = controller::profile::PROFILE_TAG, description = "Profile and full portfolio view"),
        (name = controller::project::PROJECT_TAG, description = "Projects and their skill tags"),
        (name = controller::skill::SKILL_TAG, description = "Skills and usage statistics"),
        (name = controller::search::SEARCH_TAG, description = "Cross-entity text search"),
        (name = controller::work::WORK_TAG, description = "Work experience"),
        (name = controller::health::HEALTH_TAG, description = "Liveness and database check"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::profile::get_profile,
            controller::profile::create_profile
        ))
        .routes(routes!(controller::profile::update_profile))
        .routes(routes!(controller::profile::get_full_profile))
        .routes(routes!(
            controller::project::get_projects,
            controller::project::create_project
        ))
        .routes(routes!(
            controller::project::get_project,
            controller::project::update_project,
            controller::project::delete_project
        ))
        .routes(routes!(
            controller::skill::get_skills,
            controller::skill::create_skill
        ))
        .routes(routes!(controller::skill::get_top_skills))
        .routes(routes!(controller::search::search))
        .routes(routes!(controller::work::create_work_experience))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::route_not_found)
}
