use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::RoleDto;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PromoKindDto {
    Premium,
    Admin,
}

/// Body of `POST /api/promo/activate`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct ActivatePromoDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub code: String,
}

/// Body of `POST /api/admin/create-promo`.
///
/// `type` is kept as a raw string so that unknown values produce a validation error.
/// When `code` is omitted a random code is generated.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreatePromoDto {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromoActivatedDto {
    pub message: String,
    pub role: RoleDto,
    pub is_premium: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PromoCreatedDto {
    pub message: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: PromoKindDto,
}
