use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkExperienceDto {
    pub id: i32,
    pub profile_id: i32,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    /// `None` for a current position
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Body of `POST /api/work`; `profile_id`, `company`, `position` and `start_date` are required
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateWorkExperienceDto {
    pub profile_id: Option<i32>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}
