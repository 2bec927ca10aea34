use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromoCode::Table)
                    .if_not_exists()
                    .col(pk_auto(PromoCode::Id))
                    .col(string_uniq(PromoCode::Code))
                    .col(string(PromoCode::Kind))
                    .col(boolean(PromoCode::Used).default(false))
                    .col(string_null(PromoCode::UsedBy))
                    .col(timestamp_with_time_zone_null(PromoCode::UsedAt))
                    .col(timestamp_with_time_zone(PromoCode::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PromoCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PromoCode {
    Table,
    Id,
    Code,
    Kind,
    Used,
    UsedBy,
    UsedAt,
    CreatedAt,
}
