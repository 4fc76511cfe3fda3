use sea_orm::DatabaseConnection;

use crate::{
    model::work::{CreateWorkExperienceDto, WorkExperienceDto},
    server::{
        data::{
            profile::ProfileRepository,
            work_experience::{NewWorkExperience, WorkExperienceRepository},
        },
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        service::non_blank,
    },
};

pub struct WorkExperienceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkExperienceService<'a> {
    /// Creates a new instance of [`WorkExperienceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a work history entry to a profile
    pub async fn create(
        &self,
        payload: CreateWorkExperienceDto,
    ) -> Result<WorkExperienceDto, Error> {
        let (Some(profile_id), Some(company), Some(position), Some(start_date)) = (
            payload.profile_id,
            non_blank(payload.company),
            non_blank(payload.position),
            payload.start_date,
        ) else {
            return Err(ValidationError::MissingWorkFields.into());
        };

        let profile_repo = ProfileRepository::new(self.db);
        if profile_repo.get_by_id(profile_id).await?.is_none() {
            return Err(NotFoundError::Profile(profile_id).into());
        }

        let work_repo = WorkExperienceRepository::new(self.db);
        let work = work_repo
            .create(NewWorkExperience {
                profile_id,
                company,
                position,
                start_date,
                end_date: payload.end_date,
                description: payload.description,
            })
            .await?;

        Ok(work.into())
    }
}
