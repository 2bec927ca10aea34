use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        promo::{ActivatePromoDto, CreatePromoDto, PromoActivatedDto, PromoCreatedDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::promo::PromoService,
        state::AppState,
    },
};

/// POST /api/promo/activate - Redeem a promo code
///
/// Consumes the code and grants its privilege to the user in one step. Privileges
/// add up: a premium admin keeps both.
///
/// # Returns
/// - `200 OK`: The user's resulting role and premium flag
/// - `400 Bad Request`: Missing field, unknown or already used code
/// - `404 Not Found`: No user with this email
#[utoipa::path(
    post,
    path = "/api/promo/activate",
    tag = "promo",
    request_body = ActivatePromoDto,
    responses(
        (status = 200, description = "Code redeemed", body = PromoActivatedDto),
        (status = 400, description = "Missing field, invalid or used code", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
    ),
)]
pub async fn activate(
    State(state): State<AppState>,
    Json(payload): Json<ActivatePromoDto>,
) -> Result<impl IntoResponse, AppError> {
    let promo_service = PromoService::new(state.store.as_ref(), &state.notifier);

    let user = promo_service.redeem(&payload.email, &payload.code).await?;

    Ok((
        StatusCode::OK,
        Json(PromoActivatedDto {
            message: "Promo code activated".to_string(),
            role: user.role.into_dto(),
            is_premium: user.is_premium,
        }),
    ))
}

/// POST /api/admin/create-promo - Create a promo code
///
/// A random code is generated when none is given.
///
/// # Authentication
/// Requires an admin session
///
/// # Returns
/// - `201 Created`: The created code and its type
/// - `400 Bad Request`: Unknown type or code already exists
/// - `401 Unauthorized`: Not logged in
/// - `403 Forbidden`: Logged-in user is not an admin
#[utoipa::path(
    post,
    path = "/api/admin/create-promo",
    tag = "promo",
    request_body = CreatePromoDto,
    responses(
        (status = 201, description = "Code created", body = PromoCreatedDto),
        (status = 400, description = "Unknown type or duplicate code", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
    ),
)]
pub async fn create_promo(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePromoDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(state.store.as_ref(), &session);
    let promo_service = PromoService::new(state.store.as_ref(), &state.notifier);

    let _ = auth_guard.require(&[Permission::Admin]).await?;

    let promo = promo_service
        .create(payload.code.as_deref(), &payload.kind)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PromoCreatedDto {
            message: "Promo code created".to_string(),
            code: promo.code,
            kind: promo.kind.into_dto(),
        }),
    ))
}
