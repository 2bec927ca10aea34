//! Telegram chat notifications.
//!
//! Notifications are best effort: `notify` spawns a detached task that posts the message
//! and logs any failure. Callers never wait on delivery and never observe its errors.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use crate::server::{config::TelegramConfig, error::notify::NotifyError};

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

struct TelegramChannel {
    client: reqwest::Client,
    bot_token: SecretString,
    chat_id: String,
    api_url: String,
}

impl TelegramChannel {
    #[instrument(skip(self, text), fields(chat_id = %self.chat_id))]
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(format!(
                "{}/bot{}/sendMessage",
                self.api_url,
                self.bot_token.expose_secret()
            ))
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;

        let result: SendMessageResponse = response.json().await?;

        if !result.ok {
            return Err(NotifyError::Api(
                result
                    .description
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        debug!("Notification delivered");

        Ok(())
    }
}

/// Sender for operator notifications.
///
/// Cheap to clone; all clones share one HTTP client and credentials. A notifier built
/// without Telegram credentials is disabled and only logs the messages it would send.
#[derive(Clone)]
pub struct TelegramNotifier {
    channel: Option<Arc<TelegramChannel>>,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("bot_token", &"[REDACTED]")
            .field(
                "chat_id",
                &self.channel.as_ref().map(|channel| channel.chat_id.as_str()),
            )
            .finish()
    }
}

impl TelegramNotifier {
    /// Creates a notifier, disabled when `config` is `None`.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `config` - Bot token, chat id and API base URL
    pub fn new(client: reqwest::Client, config: Option<TelegramConfig>) -> Self {
        Self {
            channel: config.map(|config| {
                Arc::new(TelegramChannel {
                    client,
                    bot_token: config.bot_token,
                    chat_id: config.chat_id,
                    api_url: config.api_url.trim_end_matches('/').to_string(),
                })
            }),
        }
    }

    /// Creates a notifier that never sends anything.
    pub fn disabled() -> Self {
        Self { channel: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.channel.is_some()
    }

    /// Sends `text` in the background.
    ///
    /// # Returns
    /// - `Some(JoinHandle)` - Handle of the detached delivery task; dropping it does not
    ///   cancel delivery
    /// - `None` - Notifier is disabled, nothing was spawned
    pub fn notify(&self, text: impl Into<String>) -> Option<JoinHandle<()>> {
        let text = text.into();

        let Some(channel) = self.channel.clone() else {
            debug!(%text, "Telegram not configured, skipping notification");
            return None;
        };

        Some(tokio::spawn(async move {
            if let Err(err) = channel.send(&text).await {
                warn!("Failed to deliver Telegram notification: {}", err);
            }
        }))
    }
}
