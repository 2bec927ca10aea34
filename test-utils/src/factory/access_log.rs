//! Access log factory for creating test access log entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating access log records.
pub struct AccessLogFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    status: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl<'a> AccessLogFactory<'a> {
    /// Defaults to a successful access by `user@example.com` with role `user`, created now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            email: "user@example.com".to_string(),
            status: "success".to_string(),
            role: "user".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::access_log::Model, DbErr> {
        entity::access_log::ActiveModel {
            email: ActiveValue::Set(self.email),
            status: ActiveValue::Set(self.status),
            role: ActiveValue::Set(self.role),
            ip: ActiveValue::Set("127.0.0.1".to_string()),
            device: ActiveValue::Set("test-device".to_string()),
            time: ActiveValue::Set(self.created_at.format("%d.%m.%Y, %H:%M:%S").to_string()),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_access_log(
    db: &DatabaseConnection,
) -> Result<entity::access_log::Model, DbErr> {
    AccessLogFactory::new(db).build().await
}
