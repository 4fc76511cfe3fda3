use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct ProjectSkillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectSkillRepository<'a, C> {
    /// Creates a new instance of [`ProjectSkillRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Attaches each of `skill_names` to the project as a tag, in order
    ///
    /// # Notes
    /// - `project_id` must exist in the projects table due to foreign key constraint
    /// - If you need transactional behavior, pass a transaction as the connection
    pub async fn create_many(&self, project_id: i32, skill_names: &[String]) -> Result<(), DbErr> {
        if skill_names.is_empty() {
            return Ok(());
        }

        let tags = skill_names
            .iter()
            .map(|skill_name| entity::project_skill::ActiveModel {
                project_id: ActiveValue::Set(project_id),
                skill_name: ActiveValue::Set(skill_name.clone()),
                ..Default::default()
            });

        entity::prelude::ProjectSkill::insert_many(tags)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Tag names of a project in insertion order
    pub async fn get_names_by_project_id(&self, project_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::ProjectSkill::find()
            .select_only()
            .column(entity::project_skill::Column::SkillName)
            .filter(entity::project_skill::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::project_skill::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Removes every tag of a project
    pub async fn delete_by_project_id(&self, project_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProjectSkill::delete_many()
            .filter(entity::project_skill::Column::ProjectId.eq(project_id))
            .exec(self.db)
            .await
    }
}
