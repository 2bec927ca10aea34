use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    User,
    Admin,
}

/// Body of `POST /api/register` and `POST /api/login`.
///
/// Missing fields deserialize to empty strings so that the service can answer with a
/// validation error instead of a deserialization rejection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CredentialsDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct GetRoleDto {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserRoleDto {
    pub email: String,
    pub role: RoleDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub email: String,
    pub role: RoleDto,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}
