use super::*;

/// Tests that records come back newest first.
///
/// Expected: Ok(Vec) ordered by descending creation time
#[tokio::test]
async fn returns_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AccessLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    AccessLogFactory::new(db)
        .email("old@x.com")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    AccessLogFactory::new(db)
        .email("new@x.com")
        .created_at(now)
        .build()
        .await?;
    AccessLogFactory::new(db)
        .email("mid@x.com")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let logs = AccessLogRepository::new(db).recent(10).await?;

    let emails: Vec<_> = logs.iter().map(|log| log.email.as_str()).collect();
    assert_eq!(emails, vec!["new@x.com", "mid@x.com", "old@x.com"]);

    Ok(())
}

/// Tests that the limit caps the number of returned records.
///
/// Expected: Ok(Vec) with only the two newest records
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AccessLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for minutes in 0..5 {
        AccessLogFactory::new(db)
            .email(format!("u{}@x.com", minutes))
            .created_at(now - Duration::minutes(minutes))
            .build()
            .await?;
    }

    let logs = AccessLogRepository::new(db).recent(2).await?;

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].email, "u0@x.com");
    assert_eq!(logs[1].email, "u1@x.com");

    Ok(())
}

/// Tests reading from an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_logs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AccessLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let logs = AccessLogRepository::new(db).recent(100).await?;

    assert!(logs.is_empty());

    Ok(())
}
