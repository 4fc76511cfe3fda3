use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_profile::Profile;

static IDX_WORK_EXPERIENCE_PROFILE_ID: &str = "idx-work_experience-profile_id";
static FK_WORK_EXPERIENCE_PROFILE_ID: &str = "fk-work_experience-profile_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkExperience::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkExperience::Id))
                    .col(integer(WorkExperience::ProfileId))
                    .col(string(WorkExperience::Company))
                    .col(string(WorkExperience::Position))
                    .col(date(WorkExperience::StartDate))
                    .col(date_null(WorkExperience::EndDate))
                    .col(text_null(WorkExperience::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WORK_EXPERIENCE_PROFILE_ID)
                    .table(WorkExperience::Table)
                    .col(WorkExperience::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WORK_EXPERIENCE_PROFILE_ID)
                    .from_tbl(WorkExperience::Table)
                    .from_col(WorkExperience::ProfileId)
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
                    .name(FK_WORK_EXPERIENCE_PROFILE_ID)
                    .table(WorkExperience::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WORK_EXPERIENCE_PROFILE_ID)
                    .table(WorkExperience::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WorkExperience::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WorkExperience {
    Table,
    Id,
    ProfileId,
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
}
