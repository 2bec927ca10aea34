//! JSON document backend of the `Store` trait.
//!
//! The whole store lives in one JSON document. Every operation loads the document,
//! and every mutation rewrites it through a temporary file followed by a rename so a
//! crash never leaves a truncated file behind. One async mutex serializes all
//! operations, which makes each read-modify-write cycle atomic within the process.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::server::{
    data::store::Store,
    error::AppError,
    model::{
        access_log::{AccessLog, CreateAccessLogParam},
        google::{GoogleAccount, UpsertGoogleAccountParam},
        photo::{CreatePhotoParam, Photo},
        promo::{CreatePromoCodeParam, PromoCode, PromoKind, RedeemPromoParam, Redemption},
        user::{CreateUserParam, Role, User},
    },
};

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    promo_codes: Vec<PromoCodeRecord>,
    #[serde(default)]
    logs: Vec<AccessLogRecord>,
    #[serde(default)]
    photos: Vec<PhotoRecord>,
    #[serde(default)]
    google_accounts: Vec<GoogleAccountRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    id: i32,
    email: String,
    password: String,
    role: String,
    is_premium: bool,
    created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
struct PromoCodeRecord {
    id: i32,
    code: String,
    #[serde(rename = "type")]
    kind: String,
    used: bool,
    used_by: Option<String>,
    used_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
struct AccessLogRecord {
    id: i32,
    email: String,
    status: String,
    role: String,
    ip: String,
    device: String,
    time: String,
    created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
struct PhotoRecord {
    id: i32,
    title: String,
    url: String,
    #[serde(rename = "public_id")]
    public_id: String,
    created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
struct GoogleAccountRecord {
    id: i32,
    google_id: String,
    display_name: String,
    email: Option<String>,
    photo: Option<String>,
    created_at: DateTime<Utc>,
    last_login_at: DateTime<Utc>,
}

impl UserRecord {
    fn to_domain(&self) -> Result<User, AppError> {
        Ok(User {
            id: self.id,
            email: self.email.clone(),
            password_hash: self.password.clone(),
            role: self.role.parse()?,
            is_premium: self.is_premium,
            created_at: self.created_at,
        })
    }
}

impl PromoCodeRecord {
    fn to_domain(&self) -> Result<PromoCode, AppError> {
        Ok(PromoCode {
            id: self.id,
            code: self.code.clone(),
            kind: self.kind.parse()?,
            used: self.used,
            used_by: self.used_by.clone(),
            used_at: self.used_at,
            created_at: self.created_at,
        })
    }
}

impl AccessLogRecord {
    fn to_domain(&self) -> Result<AccessLog, AppError> {
        Ok(AccessLog {
            id: self.id,
            email: self.email.clone(),
            status: self.status.parse()?,
            role: self.role.parse()?,
            ip: self.ip.clone(),
            device: self.device.clone(),
            time: self.time.clone(),
            created_at: self.created_at,
        })
    }
}

impl PhotoRecord {
    fn to_domain(&self) -> Photo {
        Photo {
            id: self.id,
            title: self.title.clone(),
            url: self.url.clone(),
            public_id: self.public_id.clone(),
            created_at: self.created_at,
        }
    }
}

impl GoogleAccountRecord {
    fn to_domain(&self) -> GoogleAccount {
        GoogleAccount {
            id: self.id,
            google_id: self.google_id.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            avatar_url: self.photo.clone(),
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// Next free id for a record list.
fn next_id<T>(records: &[T], id: impl Fn(&T) -> i32) -> i32 {
    records.iter().map(id).max().unwrap_or(0) + 1
}

/// Store persisted as a single JSON document on disk.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store over `path`.
    ///
    /// The file does not need to exist; a missing file reads as an empty document and
    /// is created on the first mutation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Document, AppError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Document::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Document::default()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, document: &Document) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let bytes = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        Ok(())
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn find_user(&self, email: &str) -> Result<Option<User>, AppError> {
        let _guard = self.lock.lock().await;
        let document = self.load().await?;

        document
            .users
            .iter()
            .find(|user| user.email == email)
            .map(UserRecord::to_domain)
            .transpose()
    }

    async fn create_user(&self, param: CreateUserParam) -> Result<Option<User>, AppError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;

        if document.users.iter().any(|user| user.email == param.email) {
            return Ok(None);
        }

        let record = UserRecord {
            id: next_id(&document.users, |user| user.id),
            email: param.email,
            password: param.password_hash,
            role: Role::User.as_str().to_string(),
            is_premium: false,
            created_at: Utc::now(),
        };
        let user = record.to_domain()?;

        document.users.push(record);
        self.save(&document).await?;

        Ok(Some(user))
    }

    async fn admin_exists(&self) -> Result<bool, AppError> {
        let _guard = self.lock.lock().await;
        let document = self.load().await?;

        Ok(document
            .users
            .iter()
            .any(|user| user.role == Role::Admin.as_str()))
    }

    async fn create_promo(
        &self,
        param: CreatePromoCodeParam,
    ) -> Result<Option<PromoCode>, AppError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;

        if document.promo_codes.iter().any(|promo| promo.code == param.code) {
            return Ok(None);
        }

        let record = PromoCodeRecord {
            id: next_id(&document.promo_codes, |promo| promo.id),
            code: param.code,
            kind: param.kind.as_str().to_string(),
            used: false,
            used_by: None,
            used_at: None,
            created_at: Utc::now(),
        };
        let promo = record.to_domain()?;

        document.promo_codes.push(record);
        self.save(&document).await?;

        Ok(Some(promo))
    }

    async fn unused_promo_exists(&self, kind: PromoKind) -> Result<bool, AppError> {
        let _guard = self.lock.lock().await;
        let document = self.load().await?;

        Ok(document
            .promo_codes
            .iter()
            .any(|promo| !promo.used && promo.kind == kind.as_str()))
    }

    /// Redeems while holding the store lock for the whole cycle.
    ///
    /// Both records are updated in memory and written with a single save, so the file
    /// never shows a consumed code without the matching grant.
    async fn redeem_promo(&self, param: RedeemPromoParam) -> Result<Redemption, AppError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;

        let Some(user_index) = document
            .users
            .iter()
            .position(|user| user.email == param.email)
        else {
            return Ok(Redemption::UserNotFound);
        };

        let Some(promo_index) = document
            .promo_codes
            .iter()
            .position(|promo| promo.code == param.code && !promo.used)
        else {
            return Ok(Redemption::InvalidOrUsed);
        };

        let mut promo = document.promo_codes[promo_index].to_domain()?;
        let mut user = document.users[user_index].to_domain()?;

        promo.used = true;
        promo.used_by = Some(param.email.clone());
        promo.used_at = Some(Utc::now());
        user.grant(promo.kind);

        let promo_record = &mut document.promo_codes[promo_index];
        promo_record.used = promo.used;
        promo_record.used_by = promo.used_by.clone();
        promo_record.used_at = promo.used_at;

        let user_record = &mut document.users[user_index];
        user_record.role = user.role.as_str().to_string();
        user_record.is_premium = user.is_premium;

        self.save(&document).await?;

        Ok(Redemption::Redeemed { user, promo })
    }

    async fn append_access_log(&self, param: CreateAccessLogParam) -> Result<AccessLog, AppError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;

        let record = AccessLogRecord {
            id: next_id(&document.logs, |log| log.id),
            email: param.email,
            status: param.status.as_str().to_string(),
            role: param.role.as_str().to_string(),
            ip: param.ip,
            device: param.device,
            time: param.time,
            created_at: param.created_at,
        };
        let log = record.to_domain()?;

        document.logs.push(record);
        self.save(&document).await?;

        Ok(log)
    }

    async fn recent_access_logs(&self, limit: u64) -> Result<Vec<AccessLog>, AppError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;

        document
            .logs
            .sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        document
            .logs
            .iter()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(AccessLogRecord::to_domain)
            .collect()
    }

    async fn create_photo(&self, param: CreatePhotoParam) -> Result<Photo, AppError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;

        let record = PhotoRecord {
            id: next_id(&document.photos, |photo| photo.id),
            title: param.title,
            url: param.url,
            public_id: param.public_id,
            created_at: Utc::now(),
        };
        let photo = record.to_domain();

        document.photos.push(record);
        self.save(&document).await?;

        Ok(photo)
    }

    async fn photos_newest_first(&self) -> Result<Vec<Photo>, AppError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;

        document
            .photos
            .sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(document.photos.iter().map(PhotoRecord::to_domain).collect())
    }

    async fn upsert_google_account(
        &self,
        param: UpsertGoogleAccountParam,
    ) -> Result<GoogleAccount, AppError> {
        let _guard = self.lock.lock().await;
        let mut document = self.load().await?;
        let now = Utc::now();

        let index = match document
            .google_accounts
            .iter()
            .position(|account| account.google_id == param.google_id)
        {
            Some(index) => {
                let record = &mut document.google_accounts[index];
                record.display_name = param.display_name;
                record.email = param.email;
                record.photo = param.avatar_url;
                record.last_login_at = now;
                index
            }
            None => {
                document.google_accounts.push(GoogleAccountRecord {
                    id: next_id(&document.google_accounts, |account| account.id),
                    google_id: param.google_id,
                    display_name: param.display_name,
                    email: param.email,
                    photo: param.avatar_url,
                    created_at: now,
                    last_login_at: now,
                });
                document.google_accounts.len() - 1
            }
        };

        let account = document.google_accounts[index].to_domain();
        self.save(&document).await?;

        Ok(account)
    }

    async fn find_google_account(
        &self,
        google_id: &str,
    ) -> Result<Option<GoogleAccount>, AppError> {
        let _guard = self.lock.lock().await;
        let document = self.load().await?;

        Ok(document
            .google_accounts
            .iter()
            .find(|account| account.google_id == google_id)
            .map(GoogleAccountRecord::to_domain))
    }
}
