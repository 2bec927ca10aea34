use thiserror::Error;

/// Failures delivering a chat notification.
///
/// These never reach an HTTP caller; the notifier logs them and moves on.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The request to the messaging API could not be sent or read.
    #[error("Telegram request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The messaging API answered with `ok: false`.
    #[error("Telegram API error: {0}")]
    Api(String),
}
