use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa::ToSchema;

use crate::{
    model::{api::ErrorDto, photo::PhotoDto},
    server::{
        error::AppError, model::photo::UploadPhotoParam, service::photo::PhotoService,
        state::AppState,
    },
};

/// Multipart form accepted by `POST /api/upload`.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadPhotoForm {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
    title: Option<String>,
}

/// POST /api/upload - Upload a photo
///
/// The `image` part is sent to the image host; only the resulting URL and public id
/// are stored. A blank `title` falls back to the file name.
///
/// # Returns
/// - `201 Created`: The stored photo
/// - `400 Bad Request`: No image part or unreadable form
/// - `500 Internal Server Error`: The image host rejected the upload
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "photo",
    request_body(content = UploadPhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Photo stored", body = PhotoDto),
        (status = 400, description = "Missing image", body = ErrorDto),
        (status = 500, description = "Image host failure", body = ErrorDto),
    ),
)]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let photo_service = PhotoService::new(state.store.as_ref(), state.image_host.as_ref());

    let mut title = String::new();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        match field.name() {
            Some("image") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;

                image = Some((file_name, content_type, bytes.to_vec()));
            }
            Some("title") => {
                title = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
            }
            _ => {}
        }
    }

    let Some((file_name, content_type, bytes)) = image else {
        return Err(AppError::Validation("image is required".to_string()));
    };

    let photo = photo_service
        .upload(UploadPhotoParam {
            title,
            file_name,
            content_type,
            bytes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(photo.into_dto())))
}

/// GET /api/photos - List photos, newest first
#[utoipa::path(
    get,
    path = "/api/photos",
    tag = "photo",
    responses((status = 200, description = "All photos", body = Vec<PhotoDto>)),
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let photo_service = PhotoService::new(state.store.as_ref(), state.image_host.as_ref());

    let photos = photo_service.list().await?;

    let photos_dto: Vec<_> = photos.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(photos_dto)))
}
