//! Access log domain models and parameters.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::access_log::{AccessLogDto, AccessStatusDto, CreateAccessLogDto},
    server::{
        error::{internal::InternalError, AppError},
        model::user::Role,
    },
};

/// Outcome of the access attempt being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Success,
    Failure,
}

impl AccessStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    /// Emoji prefix used in chat notifications.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Failure => "❌",
        }
    }

    pub fn into_dto(self) -> AccessStatusDto {
        match self {
            Self::Success => AccessStatusDto::Success,
            Self::Failure => AccessStatusDto::Failure,
        }
    }
}

impl FromStr for AccessStatus {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            other => Err(InternalError::UnknownStoredValue {
                field: "access status",
                value: other.to_string(),
            }),
        }
    }
}

/// Append-only audit record of an access attempt.
///
/// `role` is the acting user's role at write time and is never updated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessLog {
    pub id: i32,
    pub email: String,
    pub status: AccessStatus,
    pub role: Role,
    pub ip: String,
    pub device: String,
    /// Localized timestamp string.
    pub time: String,
    pub created_at: DateTime<Utc>,
}

impl AccessLog {
    pub fn from_entity(entity: entity::access_log::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            status: entity.status.parse()?,
            role: entity.role.parse()?,
            ip: entity.ip,
            device: entity.device,
            time: entity.time,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> AccessLogDto {
        AccessLogDto {
            email: self.email,
            status: self.status.into_dto(),
            role: self.role.into_dto(),
            ip: self.ip,
            device: self.device,
            time: self.time,
        }
    }
}

/// Fully resolved record ready to be appended.
#[derive(Debug, Clone)]
pub struct CreateAccessLogParam {
    pub email: String,
    pub status: AccessStatus,
    pub role: Role,
    pub ip: String,
    pub device: String,
    pub time: String,
    pub created_at: DateTime<Utc>,
}

/// Access event as reported by the client, before role annotation.
#[derive(Debug, Clone)]
pub struct RecordAccessParam {
    pub email: String,
    pub status: String,
    pub ip: Option<String>,
    pub device: Option<String>,
}

impl RecordAccessParam {
    /// Builds the parameter from the request body, using `forwarded_ip` when the body
    /// carries no address.
    pub fn from_dto(dto: CreateAccessLogDto, forwarded_ip: Option<String>) -> Self {
        Self {
            email: dto.email,
            status: dto.status,
            ip: dto.ip.filter(|ip| !ip.trim().is_empty()).or(forwarded_ip),
            device: dto.device,
        }
    }
}
