use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::server::data::contains_ignore_case;

/// Values for a new project row
#[derive(Clone, Debug, Default)]
pub struct NewProject {
    pub profile_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
}

/// Fields to overwrite on an existing project, `None` keeps the stored value
#[derive(Clone, Debug, Default)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
}

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new project with both timestamps set to now
    ///
    /// # Notes
    /// - `profile_id` must exist in the profile table due to foreign key constraint
    pub async fn create(&self, project: NewProject) -> Result<entity::project::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let project = entity::project::ActiveModel {
            profile_id: ActiveValue::Set(project.profile_id),
            title: ActiveValue::Set(project.title),
            description: ActiveValue::Set(project.description),
            github_link: ActiveValue::Set(project.github_link),
            live_link: ActiveValue::Set(project.live_link),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        project.insert(self.db).await
    }

    pub async fn get_by_id(&self, project_id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await
    }

    pub async fn get_many_by_profile_id(
        &self,
        profile_id: i32,
    ) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .filter(entity::project::Column::ProfileId.eq(profile_id))
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await
    }

    /// All projects newest first, optionally limited to those tagged with any of `skills`
    ///
    /// `skills` must already be lowercase; tags are compared case-insensitively. An empty
    /// slice applies no filter. Each project appears at most once however many tags match.
    pub async fn get_all_newest_first(
        &self,
        skills: &[String],
    ) -> Result<Vec<entity::project::Model>, DbErr> {
        let mut query = entity::prelude::Project::find()
            .order_by_desc(entity::project::Column::CreatedAt)
            .order_by_desc(entity::project::Column::Id);

        if !skills.is_empty() {
            let tagged_projects = entity::prelude::ProjectSkill::find()
                .select_only()
                .column(entity::project_skill::Column::ProjectId)
                .distinct()
                .filter(
                    Expr::expr(Func::lower(Expr::col(
                        entity::project_skill::Column::SkillName,
                    )))
                    .is_in(skills.iter().cloned()),
                )
                .into_query();

            query = query.filter(entity::project::Column::Id.in_subquery(tagged_projects));
        }

        query.all(self.db).await
    }

    /// Applies `changes` and bumps `updated_at`
    ///
    /// Returns `Ok(None)` if no project has the provided ID.
    pub async fn update(
        &self,
        project_id: i32,
        changes: ProjectChanges,
    ) -> Result<Option<entity::project::Model>, DbErr> {
        let project = match entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await?
        {
            Some(project) => project,
            None => return Ok(None),
        };

        let mut project_am = project.into_active_model();
        if let Some(title) = changes.title {
            project_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            project_am.description = ActiveValue::Set(Some(description));
        }
        if let Some(github_link) = changes.github_link {
            project_am.github_link = ActiveValue::Set(Some(github_link));
        }
        if let Some(live_link) = changes.live_link {
            project_am.live_link = ActiveValue::Set(Some(live_link));
        }
        project_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let project = project_am.update(self.db).await?;

        Ok(Some(project))
    }

    /// Deletes a project
    ///
    /// Returns OK regardless of the project existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, project_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Project::delete_by_id(project_id)
            .exec(self.db)
            .await
    }

    /// Projects whose title or description contains `term`, case-insensitive, ordered by ID
    pub async fn search(&self, term: &str) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .filter(
                Condition::any()
                    .add(contains_ignore_case(entity::project::Column::Title, term))
                    .add(contains_ignore_case(
                        entity::project::Column::Description,
                        term,
                    )),
            )
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await
    }
}
