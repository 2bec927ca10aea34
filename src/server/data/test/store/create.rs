use super::*;

/// Tests that both backends reject a second registration of one email.
///
/// Expected: first Ok(Some), second Ok(None)
#[tokio::test]
async fn rejects_duplicate_user() -> Result<(), AppError> {
    for backend in backends().await {
        let param = CreateUserParam {
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
        };

        let first = backend.store.create_user(param.clone()).await?;
        let second = backend.store.create_user(param).await?;

        assert!(first.is_some(), "{}", backend.name);
        assert!(second.is_none(), "{}", backend.name);
    }

    Ok(())
}

/// Tests that both backends reject a duplicate promo code string.
///
/// Expected: first Ok(Some), second Ok(None)
#[tokio::test]
async fn rejects_duplicate_promo() -> Result<(), AppError> {
    for backend in backends().await {
        let param = CreatePromoCodeParam {
            code: "VIP2024".to_string(),
            kind: PromoKind::Premium,
        };

        let first = backend.store.create_promo(param.clone()).await?;
        let second = backend.store.create_promo(param).await?;

        assert!(first.is_some(), "{}", backend.name);
        assert!(second.is_none(), "{}", backend.name);
    }

    Ok(())
}

/// Tests admin detection after registration alone.
///
/// Expected: Ok(false) since registration never grants admin
#[tokio::test]
async fn registration_never_creates_admin() -> Result<(), AppError> {
    for backend in backends().await {
        seed_user(backend.store.as_ref(), "a@x.com").await?;

        assert!(!backend.store.admin_exists().await?, "{}", backend.name);
    }

    Ok(())
}
