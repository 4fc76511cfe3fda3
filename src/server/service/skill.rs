use entity::skill::Proficiency;
use sea_orm::DatabaseConnection;

use crate::{
    model::skill::{CreateSkillDto, SkillDto, SkillUsageDto},
    server::{
        data::{
            profile::ProfileRepository,
            skill::{SkillRepository, SkillUsage},
        },
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        service::non_blank,
        util::filter::parse_limit,
    },
};

/// Parse a proficiency label, labels are case-sensitive
pub fn parse_proficiency(value: &str) -> Result<Proficiency, ValidationError> {
    match value {
        "Beginner" => Ok(Proficiency::Beginner),
        "Intermediate" => Ok(Proficiency::Intermediate),
        "Advanced" => Ok(Proficiency::Advanced),
        other => Err(ValidationError::InvalidProficiency(other.to_string())),
    }
}

impl From<SkillUsage> for SkillUsageDto {
    fn from(usage: SkillUsage) -> Self {
        Self {
            skill_name: usage.skill_name,
            proficiency: usage.proficiency,
            usage_count: usage.usage_count,
        }
    }
}

pub struct SkillService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SkillService<'a> {
    /// Creates a new instance of [`SkillService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Usage count of every (name, proficiency) pair across all profiles, most used first
    pub async fn list_usage(&self) -> Result<Vec<SkillUsageDto>, Error> {
        let skill_repo = SkillRepository::new(self.db);

        let usage = skill_repo.get_usage().await?;

        Ok(usage.into_iter().map(Into::into).collect())
    }

    /// Top usage rows ordered by stored proficiency label descending, then usage count
    ///
    /// # Arguments
    /// - `limit` - Raw `limit` query value, anything missing or not a positive integer
    ///   falls back to 10
    pub async fn top(&self, limit: Option<&str>) -> Result<Vec<SkillUsageDto>, Error> {
        let skill_repo = SkillRepository::new(self.db);

        let usage = skill_repo.get_top_usage(parse_limit(limit)).await?;

        Ok(usage.into_iter().map(Into::into).collect())
    }

    /// Adds a skill to a profile, a missing or blank proficiency defaults to `Intermediate`
    ///
    /// # Returns
    /// - `Ok(SkillDto)` - Stored skill
    /// - `Err(Error::ValidationError)` - `profile_id` or `skill_name` missing, or unknown proficiency
    /// - `Err(Error::NotFoundError)` - Owning profile does not exist
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn create(&self, payload: CreateSkillDto) -> Result<SkillDto, Error> {
        let (Some(profile_id), Some(skill_name)) =
            (payload.profile_id, non_blank(payload.skill_name))
        else {
            return Err(ValidationError::MissingSkillFields.into());
        };

        let proficiency = match non_blank(payload.proficiency) {
            Some(proficiency) => parse_proficiency(&proficiency)?,
            None => Proficiency::default(),
        };

        let profile_repo = ProfileRepository::new(self.db);
        if profile_repo.get_by_id(profile_id).await?.is_none() {
            return Err(NotFoundError::Profile(profile_id).into());
        }

        let skill_repo = SkillRepository::new(self.db);
        let skill = skill_repo
            .create(profile_id, skill_name, proficiency)
            .await?;

        Ok(skill.into())
    }
}
