use std::sync::Mutex;

use async_trait::async_trait;
use secrecy::SecretString;
use tempfile::TempDir;
use test_utils::builder::TestBuilder;

use crate::server::{
    config::TelegramConfig,
    data::{database::DatabaseStore, json::JsonFileStore},
    error::AppError,
    model::photo::{UploadPhotoParam, UploadedImage},
    service::{image_host::ImageHost, notifier::TelegramNotifier},
};

mod access_log;
mod user;

/// Database-backed store with every table created.
async fn store() -> DatabaseStore {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    DatabaseStore::new(test.db.clone().unwrap())
}

/// JSON file store in a fresh temporary directory, which must outlive the store.
fn json_store() -> (JsonFileStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("db.json"));
    (store, dir)
}

/// Notifier pointed at a port nothing listens on, so every delivery fails.
fn failing_notifier() -> TelegramNotifier {
    TelegramNotifier::new(
        reqwest::Client::new(),
        Some(TelegramConfig {
            bot_token: SecretString::from("123:abc"),
            chat_id: "-100".to_string(),
            api_url: "http://127.0.0.1:9".to_string(),
        }),
    )
}

/// Image host that records uploads instead of sending them anywhere.
#[derive(Default)]
struct FakeImageHost {
    uploads: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

#[async_trait]
impl ImageHost for FakeImageHost {
    async fn upload(&self, image: UploadPhotoParam) -> Result<UploadedImage, AppError> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::Upstream(message.clone()));
        }

        let public_id = format!("photos/{}", image.file_name);
        self.uploads.lock().unwrap().push(image.title);

        Ok(UploadedImage {
            url: format!("https://res.cloudinary.com/demo/image/upload/{}", public_id),
            public_id,
        })
    }
}
