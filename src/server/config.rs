//! Environment-driven configuration.
//!
//! All settings and credentials come from environment variables (optionally loaded from a
//! `.env` file by `main`). Optional integrations are grouped: a group is either fully set
//! or fully absent, and a partially set group is rejected at startup.

use std::{path::PathBuf, str::FromStr};

use secrecy::SecretString;

use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const TELEGRAM_API_URL: &str = "https://api.telegram.org";
const CLOUDINARY_API_URL: &str = "https://api.cloudinary.com";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://data/app.db?mode=rwc";
const DEFAULT_DATA_FILE: &str = "data/db.json";
const DEFAULT_CLIENT_URL: &str = "/";
const DEFAULT_LOG_UTC_OFFSET_HOURS: i32 = 3;
const DEFAULT_LOG_LIST_LIMIT: u64 = 100;

/// Minimum length of `SESSION_SECRET`, the size of a cookie signing key.
const SESSION_SECRET_MIN_BYTES: usize = 64;

/// Where records are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Database,
    Json,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "database" | "db" | "sqlite" => Ok(Self::Database),
            "json" | "file" => Ok(Self::Json),
            other => Err(format!("expected 'database' or 'json', got '{}'", other)),
        }
    }
}

/// Telegram bot credentials for access notifications.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: SecretString,
    pub chat_id: String,
    pub api_url: String,
}

/// Cloudinary credentials for photo uploads.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: SecretString,
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub storage_backend: StorageBackend,
    pub data_file: PathBuf,

    pub google_client_id: String,
    pub google_client_secret: SecretString,
    pub google_redirect_url: String,
    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,

    pub telegram: Option<TelegramConfig>,
    pub cloudinary: Option<CloudinaryConfig>,

    /// Cookie signing secret; a random per-process key is used when absent.
    pub session_secret: Option<SecretString>,
    /// Allowed CORS origin; any origin is allowed when absent.
    pub cors_origin: Option<String>,
    /// Where the browser is sent after Google sign-in and logout.
    pub client_url: String,
    /// UTC offset used to render access log timestamps.
    pub log_utc_offset_hours: i32,
    /// Default number of records returned by the access log listing.
    pub log_list_limit: u64,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing, invalid or partially configured variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let telegram = match (get("TELEGRAM_BOT_TOKEN"), get("TELEGRAM_CHAT_ID")) {
            (Some(token), Some(chat_id)) => Some(TelegramConfig {
                bot_token: SecretString::from(token),
                chat_id,
                api_url: TELEGRAM_API_URL.to_string(),
            }),
            (None, None) => None,
            _ => {
                return Err(ConfigError::IncompleteGroup(
                    "TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID must be set together".to_string(),
                )
                .into())
            }
        };

        let cloudinary = match (
            get("CLOUDINARY_CLOUD_NAME"),
            get("CLOUDINARY_API_KEY"),
            get("CLOUDINARY_API_SECRET"),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryConfig {
                cloud_name,
                api_key,
                api_secret: SecretString::from(api_secret),
                api_url: CLOUDINARY_API_URL.to_string(),
            }),
            (None, None, None) => None,
            _ => {
                return Err(ConfigError::IncompleteGroup(
                    "CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET \
                     must be set together"
                        .to_string(),
                )
                .into())
            }
        };

        let session_secret = match get("SESSION_SECRET") {
            Some(secret) if secret.len() < SESSION_SECRET_MIN_BYTES => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "SESSION_SECRET".to_string(),
                    reason: format!("must be at least {} bytes", SESSION_SECRET_MIN_BYTES),
                }
                .into())
            }
            secret => secret.map(SecretString::from),
        };

        Ok(Self {
            port: parse_or(&get, "PORT", DEFAULT_PORT)?,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            storage_backend: parse_or(&get, "STORAGE_BACKEND", StorageBackend::default())?,
            data_file: get("DATA_FILE")
                .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
                .into(),
            google_client_id: require("GOOGLE_CLIENT_ID")?,
            google_client_secret: SecretString::from(require("GOOGLE_CLIENT_SECRET")?),
            google_redirect_url: require("GOOGLE_REDIRECT_URL")?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            google_userinfo_url: GOOGLE_USERINFO_URL.to_string(),
            telegram,
            cloudinary,
            session_secret,
            cors_origin: get("CORS_ORIGIN"),
            client_url: get("CLIENT_URL").unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string()),
            log_utc_offset_hours: parse_or(
                &get,
                "LOG_UTC_OFFSET_HOURS",
                DEFAULT_LOG_UTC_OFFSET_HOURS,
            )?,
            log_list_limit: parse_or(&get, "LOG_LIST_LIMIT", DEFAULT_LOG_LIST_LIMIT)?,
        })
    }
}

/// Parses an optional variable, falling back to `default` when unset.
fn parse_or<T>(
    get: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: err.to_string(),
            }),
        None => Ok(default),
    }
}
