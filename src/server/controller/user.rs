use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CredentialsDto, GetRoleDto, UserDto, UserRoleDto},
    },
    server::{
        error::AppError, middleware::session::AuthSession, service::user::UserService,
        state::AppState, util::parse::normalize_email,
    },
};

/// POST /api/register - Register a new user
///
/// Stores the user with the `user` role and no premium flag. Registration succeeds
/// even when the Telegram notification cannot be delivered.
///
/// # Returns
/// - `201 Created`: Registration message
/// - `400 Bad Request`: Missing field or email already registered
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "user",
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "User registered", body = MessageDto),
        (status = 400, description = "Missing field or email already registered", body = ErrorDto),
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(state.store.as_ref(), &state.notifier);

    user_service.register(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("User registered successfully")),
    ))
}

/// POST /api/login - Log in with email and password
///
/// Binds the user's email to the session; the admin-only endpoints resolve the
/// current user from it.
///
/// # Returns
/// - `200 OK`: The logged-in user
/// - `401 Unauthorized`: Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "user",
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(state.store.as_ref(), &state.notifier);

    let user = user_service.login(payload.into()).await?;

    AuthSession::new(&session).set_user_email(&user.email).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /api/get-role - Look up the role of an email
///
/// The email is echoed normalized. Unknown emails report the `user` role.
#[utoipa::path(
    post,
    path = "/api/get-role",
    tag = "user",
    request_body = GetRoleDto,
    responses((status = 200, description = "Role of the email", body = UserRoleDto)),
)]
pub async fn get_role(
    State(state): State<AppState>,
    Json(payload): Json<GetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(state.store.as_ref(), &state.notifier);

    let role = user_service.get_role(&payload.email).await?;

    Ok((
        StatusCode::OK,
        Json(UserRoleDto {
            email: normalize_email(&payload.email),
            role: role.into_dto(),
        }),
    ))
}
