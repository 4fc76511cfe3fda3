pub use sea_orm_migration::prelude::*;

mod m20251101_000001_profile;
mod m20251101_000002_skills;
mod m20251101_000003_projects;
mod m20251101_000004_project_skills;
mod m20251101_000005_work_experience;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_profile::Migration),
            Box::new(m20251101_000002_skills::Migration),
            Box::new(m20251101_000003_projects::Migration),
            Box::new(m20251101_000004_project_skills::Migration),
            Box::new(m20251101_000005_work_experience::Migration),
        ]
    }
}
