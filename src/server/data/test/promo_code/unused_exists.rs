use super::*;

/// Tests finding an unused code of the requested kind.
///
/// Expected: Ok(true) for admin, Ok(false) for premium
#[tokio::test]
async fn matches_kind_of_unused_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromoCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PromoCodeFactory::new(db).kind("admin").build().await?;

    let repo = PromoCodeRepository::new(db);

    assert!(repo.unused_exists(PromoKind::Admin).await?);
    assert!(!repo.unused_exists(PromoKind::Premium).await?);

    Ok(())
}

/// Tests that consumed codes are ignored.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_used_codes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromoCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PromoCodeFactory::new(db)
        .kind("admin")
        .used_by("boss@x.com")
        .build()
        .await?;

    assert!(!PromoCodeRepository::new(db)
        .unused_exists(PromoKind::Admin)
        .await?);

    Ok(())
}
