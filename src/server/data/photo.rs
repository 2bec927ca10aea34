//! Photo data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::photo::{CreatePhotoParam, Photo};

pub struct PhotoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhotoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePhotoParam) -> Result<Photo, DbErr> {
        let entity = entity::photo::ActiveModel {
            title: ActiveValue::Set(param.title),
            url: ActiveValue::Set(param.url),
            public_id: ActiveValue::Set(param.public_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Photo::from_entity(entity))
    }

    /// Gets every photo, newest first.
    pub async fn get_all(&self) -> Result<Vec<Photo>, DbErr> {
        let entities = entity::prelude::Photo::find()
            .order_by_desc(entity::photo::Column::CreatedAt)
            .order_by_desc(entity::photo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Photo::from_entity).collect())
    }
}
