use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_profile::Profile;

static IDX_SKILLS_PROFILE_ID: &str = "idx-skills-profile_id";
static FK_SKILLS_PROFILE_ID: &str = "fk-skills-profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(pk_auto(Skills::Id))
                    .col(integer(Skills::ProfileId))
                    .col(string(Skills::SkillName))
                    .col(string(Skills::Proficiency).default("Intermediate"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SKILLS_PROFILE_ID)
                    .table(Skills::Table)
                    .col(Skills::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SKILLS_PROFILE_ID)
                    .from_tbl(Skills::Table)
                    .from_col(Skills::ProfileId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
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
                    .name(FK_SKILLS_PROFILE_ID)
                    .table(Skills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SKILLS_PROFILE_ID)
                    .table(Skills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Skills {
    Table,
    Id,
    ProfileId,
    SkillName,
    Proficiency,
}
