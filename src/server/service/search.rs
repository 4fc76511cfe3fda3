use sea_orm::DatabaseConnection;

use crate::{
    model::search::{SearchResponseDto, SearchResultDto},
    server::{
        data::{
            project::ProjectRepository, skill::SkillRepository,
            work_experience::WorkExperienceRepository,
        },
        error::{validation::ValidationError, Error},
    },
};

/// Case-insensitive substring search over projects, skill names and work experience.
pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    /// Creates a new instance of [`SearchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs the three searches and concatenates their hits
    ///
    /// Projects match on title or description, skills on name (each distinct name once) and
    /// work experience on company, position or description. Results are ordered projects,
    /// skills, work.
    ///
    /// # Returns
    /// - `Ok(SearchResponseDto)` - Hits with `count` equal to the number of hits
    /// - `Err(Error::ValidationError)` - Query missing or blank
    /// - `Err(Error::DbErr)` - Any of the searches failed
    pub async fn search(&self, query: Option<&str>) -> Result<SearchResponseDto, Error> {
        let term = query
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .ok_or(ValidationError::MissingSearchQuery)?;

        let project_repo = ProjectRepository::new(self.db);
        let skill_repo = SkillRepository::new(self.db);
        let work_repo = WorkExperienceRepository::new(self.db);

        let projects = project_repo.search(term).await?;
        let skills = skill_repo.search_distinct_names(term).await?;
        let work = work_repo.search(term).await?;

        let mut results = Vec::with_capacity(projects.len() + skills.len() + work.len());
        results.extend(projects.into_iter().map(|p| SearchResultDto::Project {
            id: p.id,
            title: p.title,
            description: p.description,
        }));
        results.extend(
            skills
                .into_iter()
                .map(|name| SearchResultDto::Skill { name }),
        );
        results.extend(work.into_iter().map(|w| SearchResultDto::Work {
            id: w.id,
            company: w.company,
            position: w.position,
        }));

        Ok(SearchResponseDto {
            count: results.len(),
            results,
        })
    }
}
