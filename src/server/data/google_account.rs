//! Google account data repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::google::{GoogleAccount, UpsertGoogleAccountParam};

pub struct GoogleAccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GoogleAccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a Google account or refreshes its profile on repeat sign-in.
    ///
    /// On conflict the profile columns and `last_login_at` are overwritten while
    /// `created_at` keeps the first sign-in time.
    ///
    /// # Arguments
    /// - `param` - Profile returned by Google
    ///
    /// # Returns
    /// - `Ok(GoogleAccount)` - The created or updated account
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertGoogleAccountParam) -> Result<GoogleAccount, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::GoogleAccount::insert(entity::google_account::ActiveModel {
            google_id: ActiveValue::Set(param.google_id),
            display_name: ActiveValue::Set(param.display_name),
            email: ActiveValue::Set(param.email),
            avatar_url: ActiveValue::Set(param.avatar_url),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::google_account::Column::GoogleId)
                .update_columns([
                    entity::google_account::Column::DisplayName,
                    entity::google_account::Column::Email,
                    entity::google_account::Column::AvatarUrl,
                    entity::google_account::Column::LastLoginAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(GoogleAccount::from_entity(entity))
    }

    pub async fn find_by_google_id(&self, google_id: &str) -> Result<Option<GoogleAccount>, DbErr> {
        let entity = entity::prelude::GoogleAccount::find()
            .filter(entity::google_account::Column::GoogleId.eq(google_id))
            .one(self.db)
            .await?;

        Ok(entity.map(GoogleAccount::from_entity))
    }
}
