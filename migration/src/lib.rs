pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_promo_code_table;
mod m20260301_000003_create_access_log_table;
mod m20260305_000004_create_photo_table;
mod m20260310_000005_create_google_account_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_promo_code_table::Migration),
            Box::new(m20260301_000003_create_access_log_table::Migration),
            Box::new(m20260305_000004_create_photo_table::Migration),
            Box::new(m20260310_000005_create_google_account_table::Migration),
        ]
    }
}
