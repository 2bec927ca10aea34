use super::*;

/// Tests the limit and newest-first order of the listing.
///
/// Expected: the three most recent events, newest first
#[tokio::test]
async fn returns_latest_events_first() -> Result<(), AppError> {
    let store = store().await;
    let notifier = TelegramNotifier::disabled();
    let service = AccessLogService::new(&store, &notifier, offset());

    for i in 0..5 {
        service
            .record(event(&format!("u{}@x.com", i), "success"))
            .await?;
    }

    let logs = service.list_recent(3).await?;

    let emails: Vec<_> = logs.iter().map(|log| log.email.as_str()).collect();
    assert_eq!(emails, vec!["u4@x.com", "u3@x.com", "u2@x.com"]);

    Ok(())
}

/// Tests that an oversized limit is capped instead of reaching the store.
///
/// Expected: Ok with every stored record
#[tokio::test]
async fn caps_oversized_limit() -> Result<(), AppError> {
    let store = store().await;
    let notifier = TelegramNotifier::disabled();
    let service = AccessLogService::new(&store, &notifier, offset());

    service.record(event("a@x.com", "success")).await?;

    let logs = service.list_recent(u64::MAX).await?;

    assert_eq!(logs.len(), 1);

    Ok(())
}
