use super::*;
use crate::server::model::{
    access_log::{AccessStatus, CreateAccessLogParam},
    photo::CreatePhotoParam,
};
use chrono::{Duration, Utc};

/// Tests that state survives reopening the file.
///
/// Expected: a new store over the same path sees the user and the consumed code
#[tokio::test]
async fn persists_across_instances() -> Result<(), AppError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");

    {
        let store = JsonFileStore::new(&path);
        seed_user(&store, "a@x.com").await?;
        seed_promo(&store, "VIP2024", PromoKind::Premium).await?;
        store.redeem_promo(redeem("a@x.com", "VIP2024")).await?;
    }

    let reopened = JsonFileStore::new(&path);
    let user = reopened.find_user("a@x.com").await?.unwrap();

    assert!(user.is_premium);
    assert_eq!(
        reopened.redeem_promo(redeem("a@x.com", "VIP2024")).await?,
        Redemption::InvalidOrUsed
    );

    Ok(())
}

/// Tests the on-disk document shape.
///
/// Expected: camelCase collections and fields, no temporary file left behind
#[tokio::test]
async fn writes_camel_case_document() -> Result<(), AppError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");
    let store = JsonFileStore::new(&path);

    seed_user(&store, "a@x.com").await?;
    seed_promo(&store, "VIP2024", PromoKind::Premium).await?;

    let raw = std::fs::read_to_string(&path)?;
    let document: serde_json::Value = serde_json::from_str(&raw)?;

    assert_eq!(document["users"][0]["email"], "a@x.com");
    assert_eq!(document["users"][0]["isPremium"], false);
    assert_eq!(document["promoCodes"][0]["type"], "premium");
    assert_eq!(document["promoCodes"][0]["usedBy"], serde_json::Value::Null);
    assert!(!dir.path().join("db.json.tmp").exists());

    Ok(())
}

/// Tests reading a missing or empty file.
///
/// Expected: behaves as an empty store
#[tokio::test]
async fn treats_missing_and_empty_file_as_empty() -> Result<(), AppError> {
    let dir = TempDir::new().unwrap();

    let missing = JsonFileStore::new(dir.path().join("missing.json"));
    assert!(missing.find_user("a@x.com").await?.is_none());

    let empty_path = dir.path().join("empty.json");
    std::fs::write(&empty_path, "")?;
    let empty = JsonFileStore::new(&empty_path);
    assert!(empty.recent_access_logs(10).await?.is_empty());

    Ok(())
}

/// Tests that a corrupt document surfaces as an error instead of being overwritten.
///
/// Expected: Err(AppError::JsonErr)
#[tokio::test]
async fn rejects_corrupt_document() -> Result<(), AppError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, "{ not json")?;

    let store = JsonFileStore::new(&path);
    let result = store.find_user("a@x.com").await;

    assert!(matches!(result, Err(AppError::JsonErr(_))));
    assert_eq!(std::fs::read_to_string(&path)?, "{ not json");

    Ok(())
}

/// Tests newest-first reads and the limit on the JSON backend.
///
/// Expected: logs and photos ordered by descending creation time
#[tokio::test]
async fn orders_logs_and_photos_newest_first() -> Result<(), AppError> {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("db.json"));
    let now = Utc::now();

    for (email, age) in [("old@x.com", 2), ("new@x.com", 0), ("mid@x.com", 1)] {
        store
            .append_access_log(CreateAccessLogParam {
                email: email.to_string(),
                status: AccessStatus::Success,
                role: Role::User,
                ip: "unknown".to_string(),
                device: "unknown".to_string(),
                time: String::new(),
                created_at: now - Duration::minutes(age),
            })
            .await?;
    }

    let logs = store.recent_access_logs(2).await?;
    let emails: Vec<_> = logs.iter().map(|log| log.email.as_str()).collect();
    assert_eq!(emails, vec!["new@x.com", "mid@x.com"]);

    for title in ["first", "second"] {
        store
            .create_photo(CreatePhotoParam {
                title: title.to_string(),
                url: format!("https://img/{}.jpg", title),
                public_id: title.to_string(),
            })
            .await?;
    }

    let photos = store.photos_newest_first().await?;
    assert_eq!(photos[0].title, "second");
    assert_eq!(photos[1].title, "first");

    Ok(())
}
