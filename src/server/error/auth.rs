use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No user email is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in store")]
    UserNotInDatabase(String),

    /// Email/password pair did not match a registered user.
    ///
    /// Unknown emails and wrong passwords share this variant. Results in a 401
    /// Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Logged-in user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// Exchanging the authorization code or reading the profile from Google failed.
    ///
    /// Results in a 500 Internal Server Error echoing the provider message.
    #[error("Google sign-in failed: {0}")]
    ProviderFailure(String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic, except provider failures which echo the upstream message.
///
/// # Returns
/// - 400 Bad Request - CSRF failures
/// - 401 Unauthorized - Not logged in, stale session, bad credentials
/// - 403 Forbidden - Missing permission
/// - 500 Internal Server Error - Provider failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.".to_string(),
            ),
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in".to_string())
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied".to_string()),
            Self::ProviderFailure(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
