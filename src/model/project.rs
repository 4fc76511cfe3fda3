use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub profile_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A project with its skill tags, in the order they were added
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectWithSkillsDto {
    #[serde(flatten)]
    pub project: ProjectDto,
    pub skills: Vec<String>,
}

/// Body of `POST /api/projects`; `profile_id` and `title` are required
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProjectDto {
    pub profile_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    /// Skill tags to attach to the new project
    pub skills: Option<Vec<String>>,
}

/// Body of `PUT /api/projects/{id}`; omitted fields keep their stored value
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProjectDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
}
