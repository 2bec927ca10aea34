use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with role admin
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let store = DatabaseStore::new(db.clone());

    factory::user::UserFactory::new(db)
        .email("boss@x.com")
        .role("admin")
        .build()
        .await?;

    AuthSession::new(session)
        .set_user_email("boss@x.com")
        .await?;

    let user = AuthGuard::new(&store, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.email, "boss@x.com");
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission, premium or not.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let store = DatabaseStore::new(db.clone());

    factory::user::UserFactory::new(db)
        .email("vip@x.com")
        .premium(true)
        .build()
        .await?;

    AuthSession::new(session).set_user_email("vip@x.com").await?;

    let result = AuthGuard::new(&store, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(email, message))) => {
            assert_eq!(email, "vip@x.com");
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|u| u.email)),
    }

    Ok(())
}

/// Tests an anonymous session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let store = DatabaseStore::new(db.clone());

    let result = AuthGuard::new(&store, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session referencing a user that does not exist.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_stale_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let store = DatabaseStore::new(db.clone());

    AuthSession::new(session)
        .set_user_email("gone@x.com")
        .await?;

    let result = AuthGuard::new(&store, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(email))) if email == "gone@x.com"
    ));

    Ok(())
}

/// Tests empty permission list grants access to any logged-in user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let store = DatabaseStore::new(db.clone());

    factory::user::UserFactory::new(db)
        .email("a@x.com")
        .build()
        .await?;

    AuthSession::new(session).set_user_email("a@x.com").await?;

    let user = AuthGuard::new(&store, session).require(&[]).await?;

    assert_eq!(user.email, "a@x.com");

    Ok(())
}
