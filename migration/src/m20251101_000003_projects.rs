use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_profile::Profile;

static IDX_PROJECTS_PROFILE_ID: &str = "idx-projects-profile_id";
static IDX_PROJECTS_CREATED_AT: &str = "idx-projects-created_at";
static FK_PROJECTS_PROFILE_ID: &str = "fk-projects-profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(integer(Projects::ProfileId))
                    .col(string(Projects::Title))
                    .col(text_null(Projects::Description))
                    .col(string_null(Projects::GithubLink))
                    .col(string_null(Projects::LiveLink))
                    .col(timestamp(Projects::CreatedAt))
                    .col(timestamp(Projects::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROJECTS_PROFILE_ID)
                    .table(Projects::Table)
                    .col(Projects::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROJECTS_CREATED_AT)
                    .table(Projects::Table)
                    .col(Projects::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECTS_PROFILE_ID)
                    .from_tbl(Projects::Table)
                    .from_col(Projects::ProfileId)
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
                    .name(FK_PROJECTS_PROFILE_ID)
                    .table(Projects::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROJECTS_CREATED_AT)
                    .table(Projects::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROJECTS_PROFILE_ID)
                    .table(Projects::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
    ProfileId,
    Title,
    Description,
    GithubLink,
    LiveLink,
    CreatedAt,
    UpdatedAt,
}
