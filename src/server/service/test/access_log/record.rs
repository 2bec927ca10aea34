use super::*;

/// Tests logging an event for an unregistered email.
///
/// Expected: Ok(AccessLog) with role `user` and unknown client details
#[tokio::test]
async fn unknown_email_logged_as_user() -> Result<(), AppError> {
    let store = store().await;
    let notifier = TelegramNotifier::disabled();
    let service = AccessLogService::new(&store, &notifier, offset());

    let log = service.record(event("Ghost@X.com", "success")).await?;

    assert_eq!(log.email, "ghost@x.com");
    assert_eq!(log.role, Role::User);
    assert_eq!(log.status, AccessStatus::Success);
    assert_eq!(log.ip, "unknown");
    assert_eq!(log.device, "unknown");
    assert_eq!(log.time.len(), "01.03.2026, 12:00:00".len());

    Ok(())
}

/// Tests that a log keeps the role its user had at write time.
///
/// Verifies that promoting the user afterwards changes new logs only.
///
/// Expected: first log `user`, second log `admin`
#[tokio::test]
async fn role_is_frozen_at_write_time() -> Result<(), AppError> {
    let store = store().await;
    let notifier = TelegramNotifier::disabled();
    let service = AccessLogService::new(&store, &notifier, offset());

    UserService::new(&store, &notifier)
        .register(CredentialsParam {
            email: "a@x.com".to_string(),
            password: "pw".to_string(),
        })
        .await?;

    service.record(event("a@x.com", "failure")).await?;

    let promos = PromoService::new(&store, &notifier);
    promos.create(Some("BOSS"), "admin").await?;
    promos.redeem("a@x.com", "BOSS").await?;

    service.record(event("a@x.com", "success")).await?;

    let logs = service.list_recent(10).await?;
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].role, Role::Admin);
    assert_eq!(logs[1].role, Role::User);

    Ok(())
}

/// Tests that client-provided details are stored as sent.
///
/// Expected: Ok(AccessLog) with the given ip and device
#[tokio::test]
async fn keeps_client_details() -> Result<(), AppError> {
    let store = store().await;
    let notifier = failing_notifier();
    let service = AccessLogService::new(&store, &notifier, offset());

    let log = service
        .record(RecordAccessParam {
            email: "a@x.com".to_string(),
            status: "FAILURE".to_string(),
            ip: Some("203.0.113.7".to_string()),
            device: Some("Pixel 8".to_string()),
        })
        .await?;

    assert_eq!(log.status, AccessStatus::Failure);
    assert_eq!(log.ip, "203.0.113.7");
    assert_eq!(log.device, "Pixel 8");

    Ok(())
}

/// Tests rejected events.
///
/// Expected: Err(AppError::Validation) for missing email and unknown status
#[tokio::test]
async fn rejects_invalid_events() -> Result<(), AppError> {
    let store = store().await;
    let notifier = TelegramNotifier::disabled();
    let service = AccessLogService::new(&store, &notifier, offset());

    assert!(matches!(
        service.record(event("", "success")).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.record(event("a@x.com", "maybe")).await,
        Err(AppError::Validation(_))
    ));
    assert!(service.list_recent(10).await?.is_empty());

    Ok(())
}
