//! Photo upload and listing.

use tracing::info;

use crate::server::{
    data::store::Store,
    error::AppError,
    model::photo::{CreatePhotoParam, Photo, UploadPhotoParam},
    service::image_host::ImageHost,
};

pub struct PhotoService<'a> {
    store: &'a dyn Store,
    image_host: &'a dyn ImageHost,
}

impl<'a> PhotoService<'a> {
    pub fn new(store: &'a dyn Store, image_host: &'a dyn ImageHost) -> Self {
        Self { store, image_host }
    }

    /// Uploads an image to the image host and records it.
    ///
    /// A blank title falls back to the uploaded file name.
    ///
    /// # Returns
    /// - `Ok(Photo)` - The stored photo record
    /// - `Err(AppError::Validation)` - Empty file
    /// - `Err(AppError::Upstream)` - The image host rejected the upload
    pub async fn upload(&self, mut param: UploadPhotoParam) -> Result<Photo, AppError> {
        if param.bytes.is_empty() {
            return Err(AppError::Validation("image is required".to_string()));
        }

        let title = match param.title.trim() {
            "" => param.file_name.clone(),
            title => title.to_string(),
        };
        param.title = title.clone();

        let uploaded = self.image_host.upload(param).await?;

        let photo = self
            .store
            .create_photo(CreatePhotoParam {
                title,
                url: uploaded.url,
                public_id: uploaded.public_id,
            })
            .await?;

        info!(id = photo.id, public_id = %photo.public_id, "Stored photo");

        Ok(photo)
    }

    pub async fn list(&self) -> Result<Vec<Photo>, AppError> {
        self.store.photos_newest_first().await
    }
}
