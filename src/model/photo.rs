use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PhotoDto {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub public_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
