use tower_sessions::Session;

use crate::server::{
    data::store::Store,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

pub enum Permission {
    Admin,
}

/// Resolves the logged-in user from the session and checks permissions.
pub struct AuthGuard<'a> {
    store: &'a dyn Store,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(store: &'a dyn Store, session: &'a Session) -> Self {
        Self { store, session }
    }

    /// Requires a logged-in user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session's user no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(email) = AuthSession::new(self.session).get_user_email().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = self.store.find_user(&email).await? else {
            return Err(AuthError::UserNotInDatabase(email).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            email,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
