use entity::skill::Proficiency;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkillDto {
    pub id: i32,
    pub profile_id: i32,
    pub skill_name: String,
    #[schema(value_type = String, example = "Intermediate")]
    pub proficiency: Proficiency,
}

/// Number of skill rows sharing a name and proficiency
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkillUsageDto {
    pub skill_name: String,
    #[schema(value_type = String, example = "Advanced")]
    pub proficiency: Proficiency,
    pub usage_count: i64,
}

/// Body of `POST /api/skills`; `profile_id` and `skill_name` are required
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateSkillDto {
    pub profile_id: Option<i32>,
    pub skill_name: Option<String>,
    /// One of `Beginner`, `Intermediate` or `Advanced`, defaults to `Intermediate`
    pub proficiency: Option<String>,
}
