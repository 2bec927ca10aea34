use super::*;

/// Tests appending an access record.
///
/// Verifies that every field, including the frozen role, is persisted verbatim.
///
/// Expected: Ok(AccessLog) matching the parameters
#[tokio::test]
async fn appends_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AccessLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now();
    let log = AccessLogRepository::new(db)
        .create(CreateAccessLogParam {
            email: "boss@x.com".to_string(),
            status: AccessStatus::Failure,
            role: Role::Admin,
            ip: "10.0.0.1".to_string(),
            device: "iPhone".to_string(),
            time: "01.03.2026, 12:00:00".to_string(),
            created_at,
        })
        .await?;

    assert_eq!(log.email, "boss@x.com");
    assert_eq!(log.status, AccessStatus::Failure);
    assert_eq!(log.role, Role::Admin);
    assert_eq!(log.ip, "10.0.0.1");
    assert_eq!(log.device, "iPhone");
    assert_eq!(log.time, "01.03.2026, 12:00:00");

    Ok(())
}
