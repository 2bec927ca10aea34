use super::*;

/// Tests logging in with the registered password.
///
/// Expected: Ok(User)
#[tokio::test]
async fn accepts_correct_password() -> Result<(), AppError> {
    let store = store().await;
    let notifier = TelegramNotifier::disabled();
    let service = UserService::new(&store, &notifier);

    service.register(credentials("a@x.com", "s3cret")).await?;
    let user = service.login(credentials("A@x.com", "s3cret")).await?;

    assert_eq!(user.email, "a@x.com");

    Ok(())
}

/// Tests logging in with a wrong password and with an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_wrong_password_and_unknown_user() -> Result<(), AppError> {
    let store = store().await;
    let notifier = TelegramNotifier::disabled();
    let service = UserService::new(&store, &notifier);

    service.register(credentials("a@x.com", "s3cret")).await?;

    assert!(matches!(
        service.login(credentials("a@x.com", "wrong")).await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login(credentials("ghost@x.com", "s3cret")).await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
