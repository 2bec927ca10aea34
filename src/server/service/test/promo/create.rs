use super::*;

/// Tests creating a code with an explicit value.
///
/// Expected: Ok(PromoCode) unused with the requested kind
#[tokio::test]
async fn creates_requested_code() -> Result<(), AppError> {
    let store = store().await;
    let notifier = TelegramNotifier::disabled();
    let service = PromoService::new(&store, &notifier);

    let promo = service.create(Some("VIP2024"), "Premium").await?;

    assert_eq!(promo.code, "VIP2024");
    assert_eq!(promo.kind, PromoKind::Premium);
    assert!(!promo.used);

    Ok(())
}

/// Tests creating a code without a value.
///
/// Expected: Ok(PromoCode) with a generated 12-character code
#[tokio::test]
async fn generates_code_when_omitted() -> Result<(), AppError> {
    let store = store().await;
    let notifier = TelegramNotifier::disabled();
    let service = PromoService::new(&store, &notifier);

    let promo = service.create(None, "admin").await?;
    let blank = service.create(Some("  "), "admin").await?;

    assert_eq!(promo.code.len(), 12);
    assert_eq!(blank.code.len(), 12);
    assert_ne!(promo.code, blank.code);

    Ok(())
}

/// Tests rejected inputs.
///
/// Expected: Err(Validation) for an unknown kind, Err(Conflict) for a duplicate code
#[tokio::test]
async fn rejects_unknown_kind_and_duplicates() -> Result<(), AppError> {
    let store = store().await;
    let notifier = TelegramNotifier::disabled();
    let service = PromoService::new(&store, &notifier);

    assert!(matches!(
        service.create(Some("X"), "gold").await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.create(Some("X"), "").await,
        Err(AppError::Validation(_))
    ));

    service.create(Some("VIP"), "premium").await?;
    assert!(matches!(
        service.create(Some("VIP"), "admin").await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}
