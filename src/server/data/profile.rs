use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

/// Values for a new profile row
#[derive(Clone, Debug, Default)]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    pub education: Option<String>,
    pub github_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub portfolio_link: Option<String>,
}

/// Fields to overwrite on an existing profile, `None` keeps the stored value
#[derive(Clone, Debug, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub education: Option<String>,
    pub github_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub portfolio_link: Option<String>,
}

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new profile with both timestamps set to now
    pub async fn create(&self, profile: NewProfile) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let profile = entity::profile::ActiveModel {
            name: ActiveValue::Set(profile.name),
            email: ActiveValue::Set(profile.email),
            education: ActiveValue::Set(profile.education),
            github_link: ActiveValue::Set(profile.github_link),
            linkedin_link: ActiveValue::Set(profile.linkedin_link),
            portfolio_link: ActiveValue::Set(profile.portfolio_link),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    pub async fn get_by_id(&self, profile_id: i32) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await
    }

    /// Returns the most recently created profile, the one with the highest ID
    pub async fn get_latest(&self) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .order_by_desc(entity::profile::Column::Id)
            .one(self.db)
            .await
    }

    /// Applies `changes` and bumps `updated_at`
    ///
    /// Returns `Ok(None)` if no profile has the provided ID.
    pub async fn update(
        &self,
        profile_id: i32,
        changes: ProfileChanges,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let profile = match entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await?
        {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        if let Some(name) = changes.name {
            profile_am.name = ActiveValue::Set(name);
        }
        if let Some(email) = changes.email {
            profile_am.email = ActiveValue::Set(email);
        }
        if let Some(education) = changes.education {
            profile_am.education = ActiveValue::Set(Some(education));
        }
        if let Some(github_link) = changes.github_link {
            profile_am.github_link = ActiveValue::Set(Some(github_link));
        }
        if let Some(linkedin_link) = changes.linkedin_link {
            profile_am.linkedin_link = ActiveValue::Set(Some(linkedin_link));
        }
        if let Some(portfolio_link) = changes.portfolio_link {
            profile_am.portfolio_link = ActiveValue::Set(Some(portfolio_link));
        }
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let profile = profile_am.update(self.db).await?;

        Ok(Some(profile))
    }
}
