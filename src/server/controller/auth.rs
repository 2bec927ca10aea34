use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, auth::GoogleUserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession, GoogleSession},
        service::oauth::GoogleAuthService,
        state::AppState,
    },
};

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Google for token exchange.
    pub code: String,
}

/// GET /auth/google - Start Google sign-in
#[utoipa::path(
    get,
    path = "/auth/google",
    tag = "auth",
    responses((status = 307, description = "Redirect to the Google consent screen")),
)]
pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = GoogleAuthService::new(
        state.store.as_ref(),
        &state.http_client,
        &state.oauth_client,
        &state.google_userinfo_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /auth/google/callback - Finish Google sign-in
///
/// # Returns
/// - `307 Temporary Redirect`: Signed in, back to the client
/// - `400 Bad Request`: CSRF state mismatch
/// - `500 Internal Server Error`: Token exchange or profile fetch failed
#[utoipa::path(
    get,
    path = "/auth/google/callback",
    tag = "auth",
    params(CallbackParams),
    responses(
        (status = 307, description = "Signed in, redirect to the client"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Google sign-in failed", body = ErrorDto),
    ),
)]
pub async fn google_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = GoogleAuthService::new(
        state.store.as_ref(),
        &state.http_client,
        &state.oauth_client,
        &state.google_userinfo_url,
    );

    validate_csrf(&session, &params.state).await?;

    let account = auth_service.callback(params.code).await?;

    GoogleSession::new(&session)
        .set_google_id(&account.google_id)
        .await?;

    Ok(Redirect::temporary(&state.client_url))
}

/// GET /auth/logout - Clear the session
#[utoipa::path(
    get,
    path = "/auth/logout",
    tag = "auth",
    responses((status = 307, description = "Logged out, redirect to the client")),
)]
pub async fn logout(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::temporary(&state.client_url)
}

/// GET /api/current_user - Google account bound to the session
///
/// # Returns
/// - `200 OK`: The account, or `null` when not signed in with Google
#[utoipa::path(
    get,
    path = "/api/current_user",
    tag = "auth",
    responses((status = 200, description = "Signed-in Google account or null", body = GoogleUserDto)),
)]
pub async fn current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = match GoogleSession::new(&session).get_google_id().await? {
        Some(google_id) => state.store.find_google_account(&google_id).await?,
        None => None,
    };

    let account_dto: Option<GoogleUserDto> = account.map(|a| a.into_dto());

    Ok((StatusCode::OK, Json(account_dto)))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
