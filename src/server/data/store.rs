//! Persistence interface shared by every backend.

use async_trait::async_trait;

use crate::server::{
    error::AppError,
    model::{
        access_log::{AccessLog, CreateAccessLogParam},
        google::{GoogleAccount, UpsertGoogleAccountParam},
        photo::{CreatePhotoParam, Photo},
        promo::{CreatePromoCodeParam, PromoCode, PromoKind, RedeemPromoParam, Redemption},
        user::{CreateUserParam, User},
    },
};

/// Persistent record store owned exclusively by this process.
///
/// Implementations must make `redeem_promo` atomic: of any number of concurrent
/// redemptions of one code, exactly one observes `Redemption::Redeemed`.
#[async_trait]
pub trait Store: Send + Sync {
    /// Finds a user by normalized email.
    async fn find_user(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Inserts a new user, returning `None` when the email is already registered.
    async fn create_user(&self, param: CreateUserParam) -> Result<Option<User>, AppError>;

    /// Checks whether any user holds the admin role.
    async fn admin_exists(&self) -> Result<bool, AppError>;

    /// Inserts a new unused promo code, returning `None` when the code is taken.
    async fn create_promo(
        &self,
        param: CreatePromoCodeParam,
    ) -> Result<Option<PromoCode>, AppError>;

    /// Checks whether an unused code of the given kind exists.
    async fn unused_promo_exists(&self, kind: PromoKind) -> Result<bool, AppError>;

    /// Consumes a code and widens the user's privileges as one unit.
    ///
    /// Nothing is written unless both the user and an unused code are found.
    async fn redeem_promo(&self, param: RedeemPromoParam) -> Result<Redemption, AppError>;

    async fn append_access_log(&self, param: CreateAccessLogParam) -> Result<AccessLog, AppError>;

    /// Gets up to `limit` access logs, newest first.
    async fn recent_access_logs(&self, limit: u64) -> Result<Vec<AccessLog>, AppError>;

    async fn create_photo(&self, param: CreatePhotoParam) -> Result<Photo, AppError>;

    async fn photos_newest_first(&self) -> Result<Vec<Photo>, AppError>;

    /// Inserts or refreshes a Google account keyed by its Google id.
    async fn upsert_google_account(
        &self,
        param: UpsertGoogleAccountParam,
    ) -> Result<GoogleAccount, AppError>;

    async fn find_google_account(&self, google_id: &str)
        -> Result<Option<GoogleAccount>, AppError>;
}
