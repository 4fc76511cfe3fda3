use sea_orm::DatabaseConnection;

use crate::{
    model::profile::{CreateProfileDto, FullProfileDto, ProfileDto, UpdateProfileDto},
    server::{
        data::{
            profile::{NewProfile, ProfileChanges, ProfileRepository},
            project::ProjectRepository,
            skill::SkillRepository,
            work_experience::WorkExperienceRepository,
        },
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        service::{non_blank, project::with_skills},
    },
};

/// Service for the portfolio owner's profile and its aggregated view.
pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the most recently created profile
    ///
    /// # Returns
    /// - `Ok(ProfileDto)` - Profile with the highest ID
    /// - `Err(Error::NotFoundError)` - No profile exists yet
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_latest(&self) -> Result<ProfileDto, Error> {
        let profile_repo = ProfileRepository::new(self.db);

        let profile = profile_repo
            .get_latest()
            .await?
            .ok_or(NotFoundError::NoProfile)?;

        Ok(profile.into())
    }

    /// Creates a profile, `name` and `email` must be present and non-blank
    pub async fn create(&self, payload: CreateProfileDto) -> Result<ProfileDto, Error> {
        let (Some(name), Some(email)) = (non_blank(payload.name), non_blank(payload.email)) else {
            return Err(ValidationError::MissingProfileFields.into());
        };

        let profile_repo = ProfileRepository::new(self.db);
        let profile = profile_repo
            .create(NewProfile {
                name,
                email,
                education: payload.education,
                github_link: payload.github_link,
                linkedin_link: payload.linkedin_link,
                portfolio_link: payload.portfolio_link,
            })
            .await?;

        Ok(profile.into())
    }

    /// Overwrites the provided fields of a profile
    ///
    /// # Returns
    /// - `Ok(ProfileDto)` - Updated profile
    /// - `Err(Error::ValidationError)` - `name` or `email` provided but blank
    /// - `Err(Error::NotFoundError)` - No profile with `profile_id`
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn update(
        &self,
        profile_id: i32,
        payload: UpdateProfileDto,
    ) -> Result<ProfileDto, Error> {
        if payload.name.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ValidationError::EmptyField("name").into());
        }
        if payload.email.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ValidationError::EmptyField("email").into());
        }

        let profile_repo = ProfileRepository::new(self.db);
        let profile = profile_repo
            .update(
                profile_id,
                ProfileChanges {
                    name: payload.name,
                    email: payload.email,
                    education: payload.education,
                    github_link: payload.github_link,
                    linkedin_link: payload.linkedin_link,
                    portfolio_link: payload.portfolio_link,
                },
            )
            .await?
            .ok_or(NotFoundError::Profile(profile_id))?;

        Ok(profile.into())
    }

    /// Builds the full view of a profile: its skills, its projects with their tags and its
    /// work history
    ///
    /// Reads are not wrapped in a transaction. Any failing read fails the whole view.
    pub async fn get_full(&self, profile_id: i32) -> Result<FullProfileDto, Error> {
        let profile_repo = ProfileRepository::new(self.db);
        let skill_repo = SkillRepository::new(self.db);
        let project_repo = ProjectRepository::new(self.db);
        let work_repo = WorkExperienceRepository::new(self.db);

        let profile = profile_repo
            .get_by_id(profile_id)
            .await?
            .ok_or(NotFoundError::Profile(profile_id))?;

        let skills = skill_repo.get_many_by_profile_id(profile_id).await?;
        let projects = project_repo.get_many_by_profile_id(profile_id).await?;
        let projects = with_skills(self.db, projects).await?;
        let work = work_repo.get_many_by_profile_id(profile_id).await?;

        Ok(FullProfileDto {
            profile: profile.into(),
            skills: skills.into_iter().map(Into::into).collect(),
            projects,
            work: work.into_iter().map(Into::into).collect(),
        })
    }
}
