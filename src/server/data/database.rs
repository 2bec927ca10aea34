//! SQL backend of the `Store` trait.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        access_log::AccessLogRepository, google_account::GoogleAccountRepository,
        photo::PhotoRepository, promo_code::PromoCodeRepository, store::Store,
        user::UserRepository,
    },
    error::AppError,
    model::{
        access_log::{AccessLog, CreateAccessLogParam},
        google::{GoogleAccount, UpsertGoogleAccountParam},
        photo::{CreatePhotoParam, Photo},
        promo::{CreatePromoCodeParam, PromoCode, PromoKind, RedeemPromoParam, Redemption},
        user::{CreateUserParam, User},
    },
};

/// Store backed by a SeaORM database connection.
#[derive(Clone)]
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for DatabaseStore {
    async fn find_user(&self, email: &str) -> Result<Option<User>, AppError> {
        UserRepository::new(&self.db).find_by_email(email).await
    }

    async fn create_user(&self, param: CreateUserParam) -> Result<Option<User>, AppError> {
        UserRepository::new(&self.db).create(param).await
    }

    async fn admin_exists(&self) -> Result<bool, AppError> {
        UserRepository::new(&self.db).admin_exists().await
    }

    async fn create_promo(
        &self,
        param: CreatePromoCodeParam,
    ) -> Result<Option<PromoCode>, AppError> {
        PromoCodeRepository::new(&self.db).create(param).await
    }

    async fn unused_promo_exists(&self, kind: PromoKind) -> Result<bool, AppError> {
        PromoCodeRepository::new(&self.db).unused_exists(kind).await
    }

    /// Redeems inside one transaction.
    ///
    /// The code is consumed first with a conditional update, so the transaction takes
    /// the write lock before reading anything and concurrent redemptions queue behind
    /// it. Losers see zero affected rows. An early return drops the transaction, which
    /// rolls back the consumption.
    async fn redeem_promo(&self, param: RedeemPromoParam) -> Result<Redemption, AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let promo_repo = PromoCodeRepository::new(&txn);

        let consumed = promo_repo
            .consume(&param.code, &param.email, Utc::now())
            .await?;

        if user_repo.find_by_email(&param.email).await?.is_none() {
            return Ok(Redemption::UserNotFound);
        }

        if !consumed {
            return Ok(Redemption::InvalidOrUsed);
        }

        let Some(promo) = promo_repo.find_by_code(&param.code).await? else {
            return Err(AppError::InternalError(format!(
                "Promo code {} vanished after being consumed",
                param.code
            )));
        };

        user_repo.grant(&param.email, promo.kind).await?;

        let Some(user) = user_repo.find_by_email(&param.email).await? else {
            return Err(AppError::InternalError(format!(
                "User {} vanished during redemption",
                param.email
            )));
        };

        txn.commit().await?;

        Ok(Redemption::Redeemed { user, promo })
    }

    async fn append_access_log(&self, param: CreateAccessLogParam) -> Result<AccessLog, AppError> {
        AccessLogRepository::new(&self.db).create(param).await
    }

    async fn recent_access_logs(&self, limit: u64) -> Result<Vec<AccessLog>, AppError> {
        AccessLogRepository::new(&self.db).recent(limit).await
    }

    async fn create_photo(&self, param: CreatePhotoParam) -> Result<Photo, AppError> {
        Ok(PhotoRepository::new(&self.db).create(param).await?)
    }

    async fn photos_newest_first(&self) -> Result<Vec<Photo>, AppError> {
        Ok(PhotoRepository::new(&self.db).get_all().await?)
    }

    async fn upsert_google_account(
        &self,
        param: UpsertGoogleAccountParam,
    ) -> Result<GoogleAccount, AppError> {
        Ok(GoogleAccountRepository::new(&self.db).upsert(param).await?)
    }

    async fn find_google_account(
        &self,
        google_id: &str,
    ) -> Result<Option<GoogleAccount>, AppError> {
        Ok(GoogleAccountRepository::new(&self.db)
            .find_by_google_id(google_id)
            .await?)
    }
}
