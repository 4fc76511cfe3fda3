use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single search hit, tagged with the kind of record it came from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResultDto {
    Project {
        id: i32,
        title: String,
        description: Option<String>,
    },
    Skill {
        name: String,
    },
    Work {
        id: i32,
        company: String,
        position: String,
    },
}

impl SearchResultDto {
    /// The value of the `type` discriminator for this hit
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Project { .. } => "project",
            Self::Skill { .. } => "skill",
            Self::Work { .. } => "work",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResponseDto {
    /// Projects first, then skills, then work experience
    pub results: Vec<SearchResultDto>,
    /// Always equal to `results.len()`
    pub count: usize,
}
