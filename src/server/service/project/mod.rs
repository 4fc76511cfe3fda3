//! Project service.
//!
//! Listing with the skill tag filter, single project lookups and the write operations. Tags
//! are returned alongside every project through [`with_skills`].

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::project::{CreateProjectDto, ProjectDto, ProjectWithSkillsDto, UpdateProjectDto},
    server::{
        data::{
            profile::ProfileRepository,
            project::{NewProject, ProjectChanges, ProjectRepository},
            project_skill::ProjectSkillRepository,
        },
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        model::db::ProjectModel,
        service::non_blank,
        util::filter::parse_skill_filter,
    },
};

/// Attach tag names to each project, one lookup per project, preserving input order
pub(crate) async fn with_skills<C: ConnectionTrait>(
    db: &C,
    projects: Vec<ProjectModel>,
) -> Result<Vec<ProjectWithSkillsDto>, DbErr> {
    let tag_repo = ProjectSkillRepository::new(db);

    let mut result = Vec::with_capacity(projects.len());
    for project in projects {
        let skills = tag_repo.get_names_by_project_id(project.id).await?;
        result.push(ProjectWithSkillsDto {
            project: project.into(),
            skills,
        });
    }

    Ok(result)
}

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    /// Creates a new instance of [`ProjectService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all projects newest first, each with its tags
    ///
    /// # Arguments
    /// - `skill` - Raw comma-separated filter from the query string. Projects tagged with any
    ///   of the names are returned, compared case-insensitively. Missing or blank means no
    ///   filter.
    pub async fn list(&self, skill: Option<&str>) -> Result<Vec<ProjectWithSkillsDto>, Error> {
        let project_repo = ProjectRepository::new(self.db);

        let skills = parse_skill_filter(skill);
        let projects = project_repo.get_all_newest_first(&skills).await?;

        Ok(with_skills(self.db, projects).await?)
    }

    pub async fn get(&self, project_id: i32) -> Result<ProjectWithSkillsDto, Error> {
        let project_repo = ProjectRepository::new(self.db);

        let project = project_repo
            .get_by_id(project_id)
            .await?
            .ok_or(NotFoundError::Project(project_id))?;

        let mut projects = with_skills(self.db, vec![project]).await?;

        projects
            .pop()
            .ok_or_else(|| NotFoundError::Project(project_id).into())
    }

    /// Creates a project and its tags in a single transaction
    ///
    /// Tags are trimmed and blank tags are skipped.
    ///
    /// # Returns
    /// - `Ok(ProjectWithSkillsDto)` - Stored project with the tags that were attached
    /// - `Err(Error::ValidationError)` - `profile_id` or `title` missing
    /// - `Err(Error::NotFoundError)` - Owning profile does not exist
    /// - `Err(Error::DbErr)` - Database query failed, nothing is stored
    pub async fn create(&self, payload: CreateProjectDto) -> Result<ProjectWithSkillsDto, Error> {
        let (Some(profile_id), Some(title)) = (payload.profile_id, non_blank(payload.title)) else {
            return Err(ValidationError::MissingProjectFields.into());
        };

        let skills: Vec<String> = payload
            .skills
            .unwrap_or_default()
            .into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect();

        let txn = self.db.begin().await?;

        if ProfileRepository::new(&txn)
            .get_by_id(profile_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Profile(profile_id).into());
        }

        let project = ProjectRepository::new(&txn)
            .create(NewProject {
                profile_id,
                title,
                description: payload.description,
                github_link: payload.github_link,
                live_link: payload.live_link,
            })
            .await?;

        ProjectSkillRepository::new(&txn)
            .create_many(project.id, &skills)
            .await?;

        txn.commit().await?;

        tracing::info!(
            project_id = %project.id,
            profile_id = %profile_id,
            tags = skills.len(),
            "Created project"
        );

        Ok(ProjectWithSkillsDto {
            project: project.into(),
            skills,
        })
    }

    /// Overwrites the provided fields of a project, tags are left untouched
    pub async fn update(
        &self,
        project_id: i32,
        payload: UpdateProjectDto,
    ) -> Result<ProjectDto, Error> {
        if payload.title.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ValidationError::EmptyField("title").into());
        }

        let project_repo = ProjectRepository::new(self.db);
        let project = project_repo
            .update(
                project_id,
                ProjectChanges {
                    title: payload.title,
                    description: payload.description,
                    github_link: payload.github_link,
                    live_link: payload.live_link,
                },
            )
            .await?
            .ok_or(NotFoundError::Project(project_id))?;

        Ok(project.into())
    }

    /// Deletes a project together with its tags
    ///
    /// # Returns
    /// - `Ok(())` - Project and tags removed
    /// - `Err(Error::NotFoundError)` - No project with `project_id`, nothing is changed
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn delete(&self, project_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        ProjectSkillRepository::new(&txn)
            .delete_by_project_id(project_id)
            .await?;

        let result = ProjectRepository::new(&txn).delete(project_id).await?;
        if result.rows_affected == 0 {
            return Err(NotFoundError::Project(project_id).into());
        }

        txn.commit().await?;

        tracing::info!(project_id = %project_id, "Deleted project");

        Ok(())
    }
}
