use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some(User)) carrying the stored privileges
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("vip@x.com")
        .premium(true)
        .build()
        .await?;

    let user = UserRepository::new(db).find_by_email("vip@x.com").await?;

    let user = user.unwrap();
    assert!(user.is_premium);
    assert_eq!(user.role, Role::User);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).find_by_email("ghost@x.com").await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests decoding a row whose role column holds an unknown value.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("odd@x.com")
        .role("superuser")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_email("odd@x.com").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
