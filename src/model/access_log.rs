use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::RoleDto;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccessStatusDto {
    Success,
    Failure,
}

/// Body of `POST /api/log`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateAccessLogDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AccessLogDto {
    pub email: String,
    pub status: AccessStatusDto,
    pub role: RoleDto,
    pub ip: String,
    pub device: String,
    pub time: String,
}
