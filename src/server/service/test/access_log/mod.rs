use chrono::FixedOffset;

use crate::server::{
    error::AppError,
    model::{
        access_log::{AccessStatus, RecordAccessParam},
        user::{CredentialsParam, Role},
    },
    service::{
        access_log::AccessLogService, notifier::TelegramNotifier, promo::PromoService,
        user::UserService,
    },
};

use super::{failing_notifier, store};

mod list_recent;
mod record;

fn event(email: &str, status: &str) -> RecordAccessParam {
    RecordAccessParam {
        email: email.to_string(),
        status: status.to_string(),
        ip: None,
        device: None,
    }
}

fn offset() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).unwrap()
}
