use super::*;

/// Tests finding an account after sign-in.
///
/// Expected: Ok(Some(GoogleAccount))
#[tokio::test]
async fn finds_signed_in_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoogleAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GoogleAccountRepository::new(db);
    let created = repo.upsert(profile("Jane")).await?;

    let found = repo.find_by_google_id(&created.google_id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests looking up an identity that never signed in.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoogleAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = GoogleAccountRepository::new(db)
        .find_by_google_id("unknown")
        .await?;

    assert!(found.is_none());

    Ok(())
}
