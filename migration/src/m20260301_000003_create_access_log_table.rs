use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AccessLog::Id))
                    .col(string(AccessLog::Email))
                    .col(string(AccessLog::Status))
                    .col(string(AccessLog::Role))
                    .col(string(AccessLog::Ip))
                    .col(string(AccessLog::Device))
                    .col(string(AccessLog::Time))
                    .col(timestamp_with_time_zone(AccessLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_access_log_created_at")
                    .table(AccessLog::Table)
                    .col(AccessLog::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccessLog {
    Table,
    Id,
    Email,
    Status,
    Role,
    Ip,
    Device,
    Time,
    CreatedAt,
}
