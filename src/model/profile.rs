use chrono::NaiveDateTime;
use entity::skill::Proficiency;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{project::ProjectWithSkillsDto, work::WorkExperienceDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub education: Option<String>,
    pub github_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub portfolio_link: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body of `POST /api/profile`; `name` and `email` are required
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProfileDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub education: Option<String>,
    pub github_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub portfolio_link: Option<String>,
}

/// Body of `PUT /api/profile/{id}`; omitted fields keep their stored value
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub education: Option<String>,
    pub github_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub portfolio_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileSkillDto {
    pub name: String,
    #[schema(value_type = String, example = "Advanced")]
    pub proficiency: Proficiency,
}

/// A profile together with everything it owns
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FullProfileDto {
    #[serde(flatten)]
    pub profile: ProfileDto,
    pub skills: Vec<ProfileSkillDto>,
    pub projects: Vec<ProjectWithSkillsDto>,
    pub work: Vec<WorkExperienceDto>,
}
