use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub education: Option<String>,
    pub github_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub portfolio_link: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project::Entity")]
    Project,
    #[sea_orm(has_many = "super::skill::Entity")]
    Skill,
    #[sea_orm(has_many = "super::work_experience::Entity")]
    WorkExperience,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl Related<super::work_experience::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkExperience.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
