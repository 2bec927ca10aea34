use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GoogleAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(GoogleAccount::Id))
                    .col(string_uniq(GoogleAccount::GoogleId))
                    .col(string(GoogleAccount::DisplayName))
                    .col(string_null(GoogleAccount::Email))
                    .col(string_null(GoogleAccount::AvatarUrl))
                    .col(timestamp_with_time_zone(GoogleAccount::CreatedAt))
                    .col(timestamp_with_time_zone(GoogleAccount::LastLoginAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GoogleAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GoogleAccount {
    Table,
    Id,
    GoogleId,
    DisplayName,
    Email,
    AvatarUrl,
    CreatedAt,
    LastLoginAt,
}
