use super::*;

/// Tests that a premium grant leaves an admin role intact.
///
/// Expected: role stays `admin`, `is_premium` becomes true
#[tokio::test]
async fn premium_grant_keeps_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("boss@x.com")
        .role("admin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.grant("boss@x.com", PromoKind::Premium).await?;

    let user = repo.find_by_email("boss@x.com").await?.unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_premium);

    Ok(())
}

/// Tests that an admin grant leaves the premium flag intact.
///
/// Expected: `is_premium` stays true, role becomes `admin`
#[tokio::test]
async fn admin_grant_keeps_premium_flag() -> Result<(), AppError> {
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

    let repo = UserRepository::new(db);
    repo.grant("vip@x.com", PromoKind::Admin).await?;

    let user = repo.find_by_email("vip@x.com").await?.unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_premium);

    Ok(())
}
