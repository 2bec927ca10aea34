use crate::server::{
    data::store::Store,
    error::{auth::AuthError, AppError},
    model::user::{CredentialsParam, Role},
    service::{notifier::TelegramNotifier, user::UserService},
};

use super::{failing_notifier, json_store, store};

mod login;

fn credentials(email: &str, password: &str) -> CredentialsParam {
    CredentialsParam {
        email: email.to_string(),
        password: password.to_string(),
    }
}
