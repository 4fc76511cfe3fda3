//! Database model type aliases.
//!
//! Short names for the `entity` crate models plus their conversions into API DTOs.

use crate::model::{
    profile::{ProfileDto, ProfileSkillDto},
    project::ProjectDto,
    skill::SkillDto,
    work::WorkExperienceDto,
};

/// Type alias for the portfolio owner record
pub type ProfileModel = entity::profile::Model;

/// Type alias for a skill declared on a profile
///
/// Skill names are not unique; the same name may appear on several profiles or
/// several times with a different proficiency.
pub type SkillModel = entity::skill::Model;

/// Type alias for a portfolio project
pub type ProjectModel = entity::project::Model;

/// Type alias for a skill tag attached to a project
pub type ProjectSkillModel = entity::project_skill::Model;

/// Type alias for a work history entry
pub type WorkExperienceModel = entity::work_experience::Model;

impl From<ProfileModel> for ProfileDto {
    fn from(model: ProfileModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            education: model.education,
            github_link: model.github_link,
            linkedin_link: model.linkedin_link,
            portfolio_link: model.portfolio_link,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<SkillModel> for SkillDto {
    fn from(model: SkillModel) -> Self {
        Self {
            id: model.id,
            profile_id: model.profile_id,
            skill_name: model.skill_name,
            proficiency: model.proficiency,
        }
    }
}

impl From<SkillModel> for ProfileSkillDto {
    fn from(model: SkillModel) -> Self {
        Self {
            name: model.skill_name,
            proficiency: model.proficiency,
        }
    }
}

impl From<ProjectModel> for ProjectDto {
    fn from(model: ProjectModel) -> Self {
        Self {
            id: model.id,
            profile_id: model.profile_id,
            title: model.title,
            description: model.description,
            github_link: model.github_link,
            live_link: model.live_link,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<WorkExperienceModel> for WorkExperienceDto {
    fn from(model: WorkExperienceModel) -> Self {
        Self {
            id: model.id,
            profile_id: model.profile_id,
            company: model.company,
            position: model.position,
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description,
        }
    }
}
