use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::data::contains_ignore_case;

/// Values for a new work experience row
#[derive(Clone, Debug)]
pub struct NewWorkExperience {
    pub profile_id: i32,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

pub struct WorkExperienceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WorkExperienceRepository<'a, C> {
    /// Creates a new instance of [`WorkExperienceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new work experience entry
    ///
    /// # Notes
    /// - `profile_id` must exist in the profile table due to foreign key constraint
    pub async fn create(
        &self,
        work: NewWorkExperience,
    ) -> Result<entity::work_experience::Model, DbErr> {
        let work = entity::work_experience::ActiveModel {
            profile_id: ActiveValue::Set(work.profile_id),
            company: ActiveValue::Set(work.company),
            position: ActiveValue::Set(work.position),
            start_date: ActiveValue::Set(work.start_date),
            end_date: ActiveValue::Set(work.end_date),
            description: ActiveValue::Set(work.description),
            ..Default::default()
        };

        work.insert(self.db).await
    }

    /// Work history of a profile in insertion order
    pub async fn get_many_by_profile_id(
        &self,
        profile_id: i32,
    ) -> Result<Vec<entity::work_experience::Model>, DbErr> {
        entity::prelude::WorkExperience::find()
            .filter(entity::work_experience::Column::ProfileId.eq(profile_id))
            .order_by_asc(entity::work_experience::Column::Id)
            .all(self.db)
            .await
    }

    /// Entries whose company, position or description contains `term`, case-insensitive,
    /// ordered by ID
    pub async fn search(&self, term: &str) -> Result<Vec<entity::work_experience::Model>, DbErr> {
        entity::prelude::WorkExperience::find()
            .filter(
                Condition::any()
                    .add(contains_ignore_case(
                        entity::work_experience::Column::Company,
                        term,
                    ))
                    .add(contains_ignore_case(
                        entity::work_experience::Column::Position,
                        term,
                    ))
                    .add(contains_ignore_case(
                        entity::work_experience::Column::Description,
                        term,
                    )),
            )
            .order_by_asc(entity::work_experience::Column::Id)
            .all(self.db)
            .await
    }
}
