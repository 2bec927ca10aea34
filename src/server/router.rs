use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{access_log, auth, health, photo, promo, user},
    state::AppState,
};

/// Largest accepted request body, sized for photo uploads.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "access-relay",
        description = "Access logging, promo codes, Google sign-in and photo storage"
    ),
    tags(
        (name = "user", description = "Registration, login and role lookup"),
        (name = "promo", description = "Promo code creation and redemption"),
        (name = "log", description = "Access attempt logging"),
        (name = "photo", description = "Photo upload and listing"),
        (name = "auth", description = "Google sign-in"),
        (name = "health", description = "Liveness"),
    )
)]
struct ApiDoc;

/// Builds the application router and its OpenAPI document.
///
/// The document is served at `/api/docs/openapi.json` and browsable at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::register))
        .routes(routes!(user::login))
        .routes(routes!(user::get_role))
        .routes(routes!(promo::activate))
        .routes(routes!(promo::create_promo))
        .routes(routes!(access_log::record))
        .routes(routes!(access_log::list))
        .routes(routes!(photo::upload))
        .routes(routes!(photo::list))
        .routes(routes!(auth::google_login))
        .routes(routes!(auth::google_callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::current_user))
        .routes(routes!(health::ping))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
