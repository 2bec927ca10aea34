use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Google account bound to the current session.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoogleUserDto {
    pub google_id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub photo: Option<String>,
}
