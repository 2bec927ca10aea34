//! External image hosting.
//!
//! Photos are stored by Cloudinary; only the returned URL and public id are persisted
//! locally. The `ImageHost` trait lets tests and unconfigured deployments swap the
//! provider out.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{info, instrument};

use crate::server::{
    config::CloudinaryConfig,
    error::AppError,
    model::photo::{UploadPhotoParam, UploadedImage},
};

#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Uploads an image and returns where it is served from.
    ///
    /// # Returns
    /// - `Ok(UploadedImage)` - Public URL and provider id of the stored image
    /// - `Err(AppError::Upstream)` - The provider rejected the upload
    async fn upload(&self, image: UploadPhotoParam) -> Result<UploadedImage, AppError>;
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorMessage,
}

#[derive(Deserialize)]
struct ErrorMessage {
    message: String,
}

/// Cloudinary signed upload client.
pub struct CloudinaryClient {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: SecretString,
    api_url: String,
}

impl std::fmt::Debug for CloudinaryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryClient")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl CloudinaryClient {
    pub fn new(client: reqwest::Client, config: CloudinaryConfig) -> Self {
        Self {
            client,
            cloud_name: config.cloud_name,
            api_key: config.api_key,
            api_secret: config.api_secret,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Signs the upload parameters.
    ///
    /// Parameters are serialized as `key=value` pairs sorted by key, joined with `&`,
    /// suffixed with the API secret and hashed with SHA-256.
    fn sign(&self, params: &[(&str, &str)]) -> String {
        let mut params = params.to_vec();
        params.sort_by_key(|(key, _)| *key);

        let to_sign = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(self.api_secret.expose_secret().as_bytes());

        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl ImageHost for CloudinaryClient {
    #[instrument(skip(self, image), fields(title = %image.title, size = image.bytes.len()))]
    async fn upload(&self, image: UploadPhotoParam) -> Result<UploadedImage, AppError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = self.sign(&[("timestamp", &timestamp)]);

        let mut file = Part::bytes(image.bytes).file_name(image.file_name);
        if let Some(content_type) = image.content_type.as_deref() {
            file = file.mime_str(content_type)?;
        }

        let form = Form::new()
            .part("file", file)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature_algorithm", "sha256")
            .text("signature", signature);

        let response = self
            .client
            .post(format!(
                "{}/v1_1/{}/image/upload",
                self.api_url, self.cloud_name
            ))
            .multipart(form)
            .send()
            .await
            .map_err(|err| AppError::Upstream(format!("Image upload failed: {}", err)))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("Image host responded with {}", status),
            };
            return Err(AppError::Upstream(message));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|err| AppError::Upstream(format!("Unreadable image host response: {}", err)))?;

        info!(public_id = %uploaded.public_id, "Image uploaded");

        Ok(UploadedImage {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }
}

/// Image host used when no Cloudinary credentials are configured.
#[derive(Debug, Default)]
pub struct UnconfiguredImageHost;

#[async_trait]
impl ImageHost for UnconfiguredImageHost {
    async fn upload(&self, _image: UploadPhotoParam) -> Result<UploadedImage, AppError> {
        Err(AppError::Upstream(
            "Image storage is not configured".to_string(),
        ))
    }
}
