//! Access log data repository.
//!
//! Access logs are append-only: the repository offers inserts and newest-first reads,
//! never updates or deletes.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::access_log::{AccessLog, CreateAccessLogParam},
};

pub struct AccessLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccessLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a fully annotated access record.
    ///
    /// # Returns
    /// - `Ok(AccessLog)` - The stored record
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateAccessLogParam) -> Result<AccessLog, AppError> {
        let entity = entity::access_log::ActiveModel {
            email: ActiveValue::Set(param.email),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            ip: ActiveValue::Set(param.ip),
            device: ActiveValue::Set(param.device),
            time: ActiveValue::Set(param.time),
            created_at: ActiveValue::Set(param.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        AccessLog::from_entity(entity)
    }

    /// Gets the most recent records, newest first.
    ///
    /// Ties on `created_at` are broken by insertion order.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of records to return
    pub async fn recent(&self, limit: u64) -> Result<Vec<AccessLog>, AppError> {
        let entities = entity::prelude::AccessLog::find()
            .order_by_desc(entity::access_log::Column::CreatedAt)
            .order_by_desc(entity::access_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(AccessLog::from_entity).collect()
    }
}
