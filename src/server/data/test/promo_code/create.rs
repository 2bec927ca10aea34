use super::*;

/// Tests creating a new promo code.
///
/// Expected: Ok(Some(PromoCode)) that is unused
#[tokio::test]
async fn creates_unused_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromoCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let promo = PromoCodeRepository::new(db)
        .create(CreatePromoCodeParam {
            code: "VIP2024".to_string(),
            kind: PromoKind::Premium,
        })
        .await?
        .unwrap();

    assert_eq!(promo.code, "VIP2024");
    assert_eq!(promo.kind, PromoKind::Premium);
    assert!(!promo.used);
    assert!(promo.used_by.is_none());
    assert!(promo.used_at.is_none());

    Ok(())
}

/// Tests creating a code string that already exists.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_duplicate_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PromoCode)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PromoCodeFactory::new(db).code("VIP2024").build().await?;

    let result = PromoCodeRepository::new(db)
        .create(CreatePromoCodeParam {
            code: "VIP2024".to_string(),
            kind: PromoKind::Admin,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
