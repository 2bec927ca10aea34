use super::*;

/// Tests the first sign-in of a Google identity.
///
/// Expected: Ok(GoogleAccount) with equal created and last-login timestamps
#[tokio::test]
async fn inserts_new_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoogleAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = GoogleAccountRepository::new(db)
        .upsert(profile("Jane"))
        .await?;

    assert_eq!(account.display_name, "Jane");
    assert_eq!(account.email.as_deref(), Some("jane@gmail.com"));
    assert_eq!(account.created_at, account.last_login_at);

    Ok(())
}

/// Tests a repeat sign-in with a changed profile.
///
/// Verifies that the profile is refreshed in place rather than duplicated and that
/// the first sign-in time is kept.
///
/// Expected: Ok(GoogleAccount) with the same id and new display name
#[tokio::test]
async fn refreshes_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GoogleAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GoogleAccountRepository::new(db);
    let first = repo.upsert(profile("Jane")).await?;
    let second = repo.upsert(profile("Jane Doe")).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.display_name, "Jane Doe");
    assert_eq!(second.created_at, first.created_at);
    assert!(second.last_login_at >= first.last_login_at);

    Ok(())
}
