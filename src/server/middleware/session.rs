//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user
//! sessions, organized by concern. Each struct wraps the same underlying `Session` but
//! exposes only the keys relevant to its concern.
//!
//! - `AuthSession` - Email/password login state (user email)
//! - `GoogleSession` - Google sign-in state (Google account id)
//! - `CsrfSession` - CSRF state for the Google OAuth flow

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_EMAIL: &str = "auth:user";
const SESSION_AUTH_GOOGLE_ID: &str = "auth:google_id";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Email/password authentication state.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in user's normalized email.
    ///
    /// The session id is cycled first so a session fixated before login cannot be
    /// reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - Email stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_email(&self, email: &str) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER_EMAIL, email.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in user's email.
    ///
    /// # Returns
    /// - `Ok(Some(email))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_email(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_USER_EMAIL).await?)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout; removes both login kinds and any pending OAuth state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// Google sign-in state.
pub struct GoogleSession<'a> {
    session: &'a Session,
}

impl<'a> GoogleSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the Google account id after a successful callback.
    pub async fn set_google_id(&self, google_id: &str) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_GOOGLE_ID, google_id.to_string())
            .await?;
        Ok(())
    }

    pub async fn get_google_id(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_GOOGLE_ID).await?)
    }
}

/// CSRF protection session management.
///
/// Tokens are stored when the Google flow starts and validated during the callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Arguments
    /// - `token` - The CSRF state sent to Google
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can be used only once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
