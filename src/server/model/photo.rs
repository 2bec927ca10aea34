//! Photo domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::photo::PhotoDto;

/// Photo stored in the external image host.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: i32,
    pub title: String,
    pub url: String,
    /// Identifier of the asset in the image host.
    pub public_id: String,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    pub fn from_entity(entity: entity::photo::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            url: entity.url,
            public_id: entity.public_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PhotoDto {
        PhotoDto {
            id: self.id,
            title: self.title,
            url: self.url,
            public_id: self.public_id,
            created_at: self.created_at,
        }
    }
}

/// Record to persist once the image host accepted the upload.
#[derive(Debug, Clone)]
pub struct CreatePhotoParam {
    pub title: String,
    pub url: String,
    pub public_id: String,
}

/// Image received from the client.
#[derive(Debug, Clone)]
pub struct UploadPhotoParam {
    pub title: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Location of an asset accepted by the image host.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
}
