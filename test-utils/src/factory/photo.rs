//! Photo factory for creating test photo entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating photo records as if they had been uploaded.
pub struct PhotoFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    public_id: String,
    created_at: DateTime<Utc>,
}

impl<'a> PhotoFactory<'a> {
    /// Defaults to `"Photo {id}"` with public id `"photos/{id}"`, created now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Photo {}", id),
            public_id: format!("photos/{}", id),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::photo::Model, DbErr> {
        entity::photo::ActiveModel {
            title: ActiveValue::Set(self.title),
            url: ActiveValue::Set(format!(
                "https://res.cloudinary.com/test/image/upload/{}.jpg",
                self.public_id
            )),
            public_id: ActiveValue::Set(self.public_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_photo(db: &DatabaseConnection) -> Result<entity::photo::Model, DbErr> {
    PhotoFactory::new(db).build().await
}
