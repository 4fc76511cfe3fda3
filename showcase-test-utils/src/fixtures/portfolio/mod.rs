//! Portfolio fixture utilities.
//!
//! Methods on [`PortfolioFixtures`] insert rows into the test database and return the stored
//! models; [`factory`] builds in-memory models without touching the database.

pub mod factory;

use chrono::{NaiveDate, Utc};
use entity::skill::Proficiency;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    /// Access portfolio fixture helpers
    pub fn portfolio<'a>(&'a mut self) -> PortfolioFixtures<'a> {
        PortfolioFixtures { setup: self }
    }
}

pub struct PortfolioFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PortfolioFixtures<'a> {
    /// Insert a profile with a generated email address derived from `name`
    pub async fn insert_profile(&self, name: &str) -> Result<entity::profile::Model, TestError> {
        let now = Utc::now().naive_utc();
        let email = format!(
            "{}@example.com",
            name.to_lowercase().replace(char::is_whitespace, ".")
        );

        Ok(
            entity::prelude::Profile::insert(entity::profile::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(email),
                education: ActiveValue::Set(None),
                github_link: ActiveValue::Set(None),
                linkedin_link: ActiveValue::Set(None),
                portfolio_link: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_skill(
        &self,
        profile_id: i32,
        skill_name: &str,
        proficiency: Proficiency,
    ) -> Result<entity::skill::Model, TestError> {
        Ok(
            entity::prelude::Skill::insert(entity::skill::ActiveModel {
                profile_id: ActiveValue::Set(profile_id),
                skill_name: ActiveValue::Set(skill_name.to_string()),
                proficiency: ActiveValue::Set(proficiency),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a project and one tag row per entry in `tags`, in order
    pub async fn insert_project(
        &self,
        profile_id: i32,
        title: &str,
        description: Option<&str>,
        tags: &[&str],
    ) -> Result<entity::project::Model, TestError> {
        let now = Utc::now().naive_utc();

        let project = entity::prelude::Project::insert(entity::project::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            github_link: ActiveValue::Set(None),
            live_link: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        for tag in tags {
            self.insert_project_tag(project.id, tag).await?;
        }

        Ok(project)
    }

    pub async fn insert_project_tag(
        &self,
        project_id: i32,
        skill_name: &str,
    ) -> Result<entity::project_skill::Model, TestError> {
        Ok(
            entity::prelude::ProjectSkill::insert(entity::project_skill::ActiveModel {
                project_id: ActiveValue::Set(project_id),
                skill_name: ActiveValue::Set(skill_name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a work experience entry starting 2024-01-01 with no end date
    pub async fn insert_work(
        &self,
        profile_id: i32,
        company: &str,
        position: &str,
        description: Option<&str>,
    ) -> Result<entity::work_experience::Model, TestError> {
        let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();

        Ok(
            entity::prelude::WorkExperience::insert(entity::work_experience::ActiveModel {
                profile_id: ActiveValue::Set(profile_id),
                company: ActiveValue::Set(company.to_string()),
                position: ActiveValue::Set(position.to_string()),
                start_date: ActiveValue::Set(start_date),
                end_date: ActiveValue::Set(None),
                description: ActiveValue::Set(description.map(str::to_string)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
