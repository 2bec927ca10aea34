//! Access event logging.
//!
//! Every recorded event is annotated with the acting user's role as it is at write time,
//! stamped with a localized time, appended to the store and relayed to the operator chat.

use chrono::{FixedOffset, Utc};
use tracing::info;

use crate::server::{
    data::store::Store,
    error::AppError,
    model::{
        access_log::{AccessLog, AccessStatus, CreateAccessLogParam, RecordAccessParam},
        user::{badge, Role},
    },
    service::notifier::TelegramNotifier,
    util::{
        parse::{normalize_email, required},
        time::format_local_time,
    },
};

/// Stored in place of client details the request did not provide.
const UNKNOWN: &str = "unknown";

/// Upper bound on records returned by one listing.
pub const MAX_LOG_LIMIT: u64 = 1000;

pub struct AccessLogService<'a> {
    store: &'a dyn Store,
    notifier: &'a TelegramNotifier,
    offset: FixedOffset,
}

impl<'a> AccessLogService<'a> {
    /// Creates the service.
    ///
    /// # Arguments
    /// - `store` - Persistence backend
    /// - `notifier` - Operator chat notifier
    /// - `offset` - Time zone used for the human-readable `time` field
    pub fn new(store: &'a dyn Store, notifier: &'a TelegramNotifier, offset: FixedOffset) -> Self {
        Self {
            store,
            notifier,
            offset,
        }
    }

    /// Records an access event.
    ///
    /// Unregistered emails are logged with role `user`. The role is copied into the
    /// record and never updated afterwards, even if the user's role changes.
    ///
    /// # Returns
    /// - `Ok(AccessLog)` - The stored record
    /// - `Err(AppError::Validation)` - Missing email or status outside `success`/`failure`
    pub async fn record(&self, param: RecordAccessParam) -> Result<AccessLog, AppError> {
        let email = normalize_email(required("email", &param.email)?);
        let status = required("status", &param.status)?
            .to_ascii_lowercase()
            .parse::<AccessStatus>()
            .map_err(|_| {
                AppError::Validation("status must be 'success' or 'failure'".to_string())
            })?;

        let (role, is_premium) = match self.store.find_user(&email).await? {
            Some(user) => (user.role, user.is_premium),
            None => (Role::User, false),
        };

        let now = Utc::now();
        let log = self
            .store
            .append_access_log(CreateAccessLogParam {
                email,
                status,
                role,
                ip: or_unknown(param.ip),
                device: or_unknown(param.device),
                time: format_local_time(now, self.offset),
                created_at: now,
            })
            .await?;

        info!(
            email = %log.email,
            status = log.status.as_str(),
            role = log.role.as_str(),
            "Recorded access"
        );
        self.notifier
            .notify(notification_text(&log, badge(role, is_premium)));

        Ok(log)
    }

    /// Gets up to `limit` records, newest first.
    ///
    /// `limit` is capped at `MAX_LOG_LIMIT`.
    pub async fn list_recent(&self, limit: u64) -> Result<Vec<AccessLog>, AppError> {
        self.store
            .recent_access_logs(limit.min(MAX_LOG_LIMIT))
            .await
    }
}

fn or_unknown(value: Option<String>) -> String {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn notification_text(log: &AccessLog, badge: &str) -> String {
    format!(
        "{} {} {}\nStatus: {}\nRole: {}\nIP: {}\nDevice: {}\nTime: {}",
        log.status.icon(),
        badge,
        log.email,
        log.status.as_str(),
        log.role.as_str(),
        log.ip,
        log.device,
        log.time
    )
}
