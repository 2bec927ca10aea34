use super::*;

/// Tests consuming an unused code.
///
/// Expected: Ok(true) and the record marked used by the redeeming email
#[tokio::test]
async fn consumes_unused_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromoCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PromoCodeFactory::new(db).code("VIP2024").build().await?;

    let repo = PromoCodeRepository::new(db);
    let consumed = repo.consume("VIP2024", "a@x.com", Utc::now()).await?;

    assert!(consumed);

    let promo = repo.find_by_code("VIP2024").await?.unwrap();
    assert!(promo.used);
    assert_eq!(promo.used_by.as_deref(), Some("a@x.com"));
    assert!(promo.used_at.is_some());

    Ok(())
}

/// Tests consuming a code a second time.
///
/// Verifies that the first consumer is preserved in `used_by`.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_already_used_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromoCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PromoCodeFactory::new(db)
        .code("VIP2024")
        .used_by("first@x.com")
        .build()
        .await?;

    let repo = PromoCodeRepository::new(db);
    let consumed = repo.consume("VIP2024", "second@x.com", Utc::now()).await?;

    assert!(!consumed);

    let promo = repo.find_by_code("VIP2024").await?.unwrap();
    assert_eq!(promo.used_by.as_deref(), Some("first@x.com"));

    Ok(())
}

/// Tests consuming a code that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_unknown_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromoCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let consumed = PromoCodeRepository::new(db)
        .consume("NOPE", "a@x.com", Utc::now())
        .await?;

    assert!(!consumed);

    Ok(())
}
