use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_auto(Profile::Id))
                    .col(string(Profile::Name))
                    .col(string(Profile::Email))
                    .col(text_null(Profile::Education))
                    .col(string_null(Profile::GithubLink))
                    .col(string_null(Profile::LinkedinLink))
                    .col(string_null(Profile::PortfolioLink))
                    .col(timestamp(Profile::CreatedAt))
                    .col(timestamp(Profile::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    Name,
    Email,
    Education,
    GithubLink,
    LinkedinLink,
    PortfolioLink,
    CreatedAt,
    UpdatedAt,
}
