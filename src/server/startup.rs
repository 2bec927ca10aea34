use std::sync::Arc;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use secrecy::ExposeSecret;
use time::Duration;
use tower_sessions::{cookie::Key, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, StorageBackend},
    data::{database::DatabaseStore, json::JsonFileStore, store::Store},
    error::{config::ConfigError, AppError},
    service::{
        image_host::{CloudinaryClient, ImageHost, UnconfiguredImageHost},
        notifier::TelegramNotifier,
        promo::PromoService,
    },
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. The connection also backs the session store, so it is opened even
/// when records live in the JSON file.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    // sqlite creates the file with mode=rwc but not its directory
    let db_dir = config
        .database_url
        .strip_prefix("sqlite://")
        .and_then(|rest| rest.split('?').next())
        .and_then(|path| std::path::Path::new(path).parent())
        .filter(|dir| !dir.as_os_str().is_empty());
    if let Some(dir) = db_dir {
        tokio::fs::create_dir_all(dir).await?;
    }

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the Sqlite database.
///
/// Sessions expire after 24 hours of inactivity. Cookies are marked secure when the
/// service is reached over https. Cookies are signed with `SESSION_SECRET`, or with a
/// random per-process key when it is unset, which logs everyone out on restart.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::DbErr)` - Failed to create the session table
/// - `Err(AppError::ConfigErr)` - The session secret is too short to derive a key
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore, tower_sessions::service::SignedCookie>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let secure = config.google_redirect_url.starts_with("https://");

    let key = match &config.session_secret {
        Some(secret) => Key::try_from(secret.expose_secret().as_bytes()).map_err(|e| {
            ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: e.to_string(),
            }
        })?,
        None => {
            tracing::warn!("SESSION_SECRET not set, using a random key for this run");
            Key::generate()
        }
    };

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)))
        .with_signed(key);

    Ok(session)
}

/// Builds the HTTP client used for all outbound requests.
///
/// Redirects are disabled so provider responses cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Builds the OAuth2 client for Google sign-in.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect URLs set
/// - `Err(AppError::ConfigErr)` - One of the configured URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid_url = |var: &str, e: url::ParseError| ConfigError::InvalidEnvVar {
        name: var.to_string(),
        reason: e.to_string(),
    };

    let auth_url = AuthUrl::new(config.google_auth_url.clone())
        .map_err(|e| invalid_url("GOOGLE_AUTH_URL", e))?;
    let token_url = TokenUrl::new(config.google_token_url.clone())
        .map_err(|e| invalid_url("GOOGLE_TOKEN_URL", e))?;
    let redirect_url = RedirectUrl::new(config.google_redirect_url.clone())
        .map_err(|e| invalid_url("GOOGLE_REDIRECT_URL", e))?;

    let client = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(
            config.google_client_secret.expose_secret().to_string(),
        ))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Selects the record store named by `STORAGE_BACKEND`.
pub fn build_store(config: &Config, db: &sea_orm::DatabaseConnection) -> Arc<dyn Store> {
    match config.storage_backend {
        StorageBackend::Database => {
            tracing::info!("Storing records in the database");
            Arc::new(DatabaseStore::new(db.clone()))
        }
        StorageBackend::Json => {
            tracing::info!("Storing records in {}", config.data_file.display());
            Arc::new(JsonFileStore::new(config.data_file.clone()))
        }
    }
}

pub fn build_notifier(config: &Config, http_client: &reqwest::Client) -> TelegramNotifier {
    let notifier = TelegramNotifier::new(http_client.clone(), config.telegram.clone());

    if !notifier.is_enabled() {
        tracing::info!("Telegram is not configured, notifications are disabled");
    }

    notifier
}

pub fn build_image_host(config: &Config, http_client: &reqwest::Client) -> Arc<dyn ImageHost> {
    match &config.cloudinary {
        Some(cloudinary) => Arc::new(CloudinaryClient::new(
            http_client.clone(),
            cloudinary.clone(),
        )),
        None => {
            tracing::info!("Cloudinary is not configured, photo uploads are disabled");
            Arc::new(UnconfiguredImageHost)
        }
    }
}

/// Checks for an admin and logs a one-time admin promo code when there is none.
///
/// The code is redeemed through `POST /api/promo/activate` like any other admin code.
pub async fn check_for_admin(
    store: &dyn Store,
    notifier: &TelegramNotifier,
) -> Result<(), AppError> {
    let promo_service = PromoService::new(store, notifier);

    if let Some(code) = promo_service.bootstrap_admin_code().await? {
        tracing::info!(
            "No admin exists, redeem this admin promo code to become one: {}",
            code
        );
    }

    Ok(())
}
