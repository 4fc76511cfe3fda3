use entity::skill::Proficiency;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::data::contains_ignore_case;

/// Row of the grouped skill usage query
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct SkillUsage {
    pub skill_name: String,
    pub proficiency: Proficiency,
    pub usage_count: i64,
}

pub struct SkillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SkillRepository<'a, C> {
    /// Creates a new instance of [`SkillRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new skill
    ///
    /// # Notes
    /// - `profile_id` must exist in the profile table due to foreign key constraint
    pub async fn create(
        &self,
        profile_id: i32,
        skill_name: String,
        proficiency: Proficiency,
    ) -> Result<entity::skill::Model, DbErr> {
        let skill = entity::skill::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            skill_name: ActiveValue::Set(skill_name),
            proficiency: ActiveValue::Set(proficiency),
            ..Default::default()
        };

        skill.insert(self.db).await
    }

    pub async fn get_many_by_profile_id(
        &self,
        profile_id: i32,
    ) -> Result<Vec<entity::skill::Model>, DbErr> {
        entity::prelude::Skill::find()
            .filter(entity::skill::Column::ProfileId.eq(profile_id))
            .order_by_asc(entity::skill::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts skill rows per (name, proficiency) pair across all profiles
    ///
    /// Ordered by count descending, ties broken by name then proficiency.
    pub async fn get_usage(&self) -> Result<Vec<SkillUsage>, DbErr> {
        entity::prelude::Skill::find()
            .select_only()
            .column(entity::skill::Column::SkillName)
            .column(entity::skill::Column::Proficiency)
            .column_as(entity::skill::Column::Id.count(), "usage_count")
            .group_by(entity::skill::Column::SkillName)
            .group_by(entity::skill::Column::Proficiency)
            .order_by_desc(entity::skill::Column::Id.count())
            .order_by_asc(entity::skill::Column::SkillName)
            .order_by_asc(entity::skill::Column::Proficiency)
            .into_model::<SkillUsage>()
            .all(self.db)
            .await
    }

    /// Returns at most `limit` usage rows ordered by proficiency, then count
    ///
    /// Proficiency is compared as stored text in descending order, so `Intermediate` sorts
    /// before `Beginner` which sorts before `Advanced`.
    pub async fn get_top_usage(&self, limit: u64) -> Result<Vec<SkillUsage>, DbErr> {
        entity::prelude::Skill::find()
            .select_only()
            .column(entity::skill::Column::SkillName)
            .column(entity::skill::Column::Proficiency)
            .column_as(entity::skill::Column::Id.count(), "usage_count")
            .group_by(entity::skill::Column::SkillName)
            .group_by(entity::skill::Column::Proficiency)
            .order_by_desc(entity::skill::Column::Proficiency)
            .order_by_desc(entity::skill::Column::Id.count())
            .order_by_asc(entity::skill::Column::SkillName)
            .limit(limit)
            .into_model::<SkillUsage>()
            .all(self.db)
            .await
    }

    /// Distinct skill names containing `term`, case-insensitive, ordered by name
    pub async fn search_distinct_names(&self, term: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::Skill::find()
            .select_only()
            .column(entity::skill::Column::SkillName)
            .distinct()
            .filter(contains_ignore_case(entity::skill::Column::SkillName, term))
            .order_by_asc(entity::skill::Column::SkillName)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
