use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PromoError {
    /// No registered user matches the redeeming email.
    ///
    /// Results in a 404 Not Found response.
    #[error("No user registered with email {0}")]
    UserNotFound(String),

    /// The code does not exist or has already been consumed.
    ///
    /// Results in a 400 Bad Request response. Unknown and consumed codes share one
    /// message so callers cannot probe which codes exist.
    #[error("Promo code {0} is invalid or already used")]
    InvalidOrUsed(String),
}

impl IntoResponse for PromoError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidOrUsed(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Promo code is invalid or already used".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
