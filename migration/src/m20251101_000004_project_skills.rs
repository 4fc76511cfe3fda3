use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_projects::Projects;

static IDX_PROJECT_SKILLS_PROJECT_ID: &str = "idx-project_skills-project_id";
static FK_PROJECT_SKILLS_PROJECT_ID: &str = "fk-project_skills-project_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectSkills::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectSkills::Id))
                    .col(integer(ProjectSkills::ProjectId))
                    .col(string(ProjectSkills::SkillName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROJECT_SKILLS_PROJECT_ID)
                    .table(ProjectSkills::Table)
                    .col(ProjectSkills::ProjectId)
                    .to_owned(),
            )
            .await?;

        // Tags are owned by their project and go with it on delete
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECT_SKILLS_PROJECT_ID)
                    .from_tbl(ProjectSkills::Table)
                    .from_col(ProjectSkills::ProjectId)
                    .to_tbl(Projects::Table)
                    .to_col(Projects::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROJECT_SKILLS_PROJECT_ID)
                    .table(ProjectSkills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROJECT_SKILLS_PROJECT_ID)
                    .table(ProjectSkills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectSkills::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProjectSkills {
    Table,
    Id,
    ProjectId,
    SkillName,
}
