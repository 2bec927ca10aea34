//! User registration, login and role lookup.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::info;

use crate::server::{
    data::store::Store,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParam, CredentialsParam, Role, User},
    service::notifier::TelegramNotifier,
    util::parse::{normalize_email, required},
};

pub struct UserService<'a> {
    store: &'a dyn Store,
    notifier: &'a TelegramNotifier,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a dyn Store, notifier: &'a TelegramNotifier) -> Self {
        Self { store, notifier }
    }

    /// Registers a new user with role `user` and no premium flag.
    ///
    /// The password is stored as an Argon2id hash. A notification is sent after the
    /// user is stored; its delivery never affects the result.
    ///
    /// # Arguments
    /// - `param` - Raw email and password from the request
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::Validation)` - Email or password is empty
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, param: CredentialsParam) -> Result<User, AppError> {
        let email = normalize_email(required("email", &param.email)?);
        if param.password.is_empty() {
            return Err(AppError::Validation("password is required".to_string()));
        }

        let password_hash = hash_password(&param.password)?;

        let Some(user) = self
            .store
            .create_user(CreateUserParam {
                email,
                password_hash,
            })
            .await?
        else {
            return Err(AppError::Conflict("User already exists".to_string()));
        };

        info!(email = %user.email, "Registered new user");
        self.notifier
            .notify(format!("🆕 New registration: {}", user.email));

        Ok(user)
    }

    /// Verifies credentials of a registered user.
    ///
    /// Unknown emails and wrong passwords are indistinguishable to the caller.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::Validation)` - Email or password is empty
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    pub async fn login(&self, param: CredentialsParam) -> Result<User, AppError> {
        let email = normalize_email(required("email", &param.email)?);
        if param.password.is_empty() {
            return Err(AppError::Validation("password is required".to_string()));
        }

        let user = self
            .store
            .find_user(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(&param.password, &user.password_hash)?;

        Ok(user)
    }

    /// Looks up the role of an email.
    ///
    /// Unknown or empty emails resolve to `Role::User`; this never fails for a
    /// missing user.
    pub async fn get_role(&self, email: &str) -> Result<Role, AppError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Ok(Role::User);
        }

        Ok(self
            .store
            .find_user(&email)
            .await?
            .map(|user| user.role)
            .unwrap_or_default())
    }
}

/// Hashes a password using Argon2id with a random salt.
fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| InternalError::PasswordHash(err.to_string()))
}

/// Verifies a password against a stored PHC hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
