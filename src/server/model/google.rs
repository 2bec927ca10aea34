//! Google account domain models.

use chrono::{DateTime, Utc};

use crate::model::auth::GoogleUserDto;

/// Google identity that has signed in at least once.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleAccount {
    pub id: i32,
    /// Google `sub` claim.
    pub google_id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl GoogleAccount {
    pub fn from_entity(entity: entity::google_account::Model) -> Self {
        Self {
            id: entity.id,
            google_id: entity.google_id,
            display_name: entity.display_name,
            email: entity.email,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        }
    }

    pub fn into_dto(self) -> GoogleUserDto {
        GoogleUserDto {
            google_id: self.google_id,
            display_name: self.display_name,
            email: self.email,
            photo: self.avatar_url,
        }
    }
}

/// Profile returned by Google, inserted or refreshed on every sign-in.
#[derive(Debug, Clone)]
pub struct UpsertGoogleAccountParam {
    pub google_id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}
