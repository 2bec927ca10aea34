//! Promo code engine.
//!
//! Codes are created by admins (or once at startup as a bootstrap admin code) and
//! redeemed by registered users. Redemption consumes the code and widens the user's
//! privileges in one atomic store operation.

use rand::Rng;
use tracing::{info, warn};

use crate::server::{
    data::store::Store,
    error::{promo::PromoError, AppError},
    model::{
        promo::{CreatePromoCodeParam, PromoCode, PromoKind, RedeemPromoParam, Redemption},
        user::User,
    },
    service::notifier::TelegramNotifier,
    util::parse::{normalize_email, required},
};

/// Length of generated promo codes.
const CODE_LENGTH: usize = 12;

pub struct PromoService<'a> {
    store: &'a dyn Store,
    notifier: &'a TelegramNotifier,
}

impl<'a> PromoService<'a> {
    pub fn new(store: &'a dyn Store, notifier: &'a TelegramNotifier) -> Self {
        Self { store, notifier }
    }

    /// Creates a new unused promo code.
    ///
    /// # Arguments
    /// - `code` - Desired code; a random one is generated when `None` or blank
    /// - `kind` - Raw kind from the request, `premium` or `admin`
    ///
    /// # Returns
    /// - `Ok(PromoCode)` - The created code
    /// - `Err(AppError::Validation)` - Unknown kind
    /// - `Err(AppError::Conflict)` - Code already exists
    pub async fn create(&self, code: Option<&str>, kind: &str) -> Result<PromoCode, AppError> {
        let kind = required("type", kind)?
            .to_ascii_lowercase()
            .parse::<PromoKind>()
            .map_err(|_| AppError::Validation("type must be 'premium' or 'admin'".to_string()))?;

        let code = match code.map(str::trim).filter(|code| !code.is_empty()) {
            Some(code) => code.to_string(),
            None => generate_random_code(),
        };

        let Some(promo) = self
            .store
            .create_promo(CreatePromoCodeParam {
                code: code.clone(),
                kind,
            })
            .await?
        else {
            return Err(AppError::Conflict(format!("Promo code {} already exists", code)));
        };

        info!(code = %promo.code, kind = promo.kind.as_str(), "Created promo code");

        Ok(promo)
    }

    /// Redeems a code for a registered user.
    ///
    /// On success exactly one code becomes used and exactly one user gains the
    /// privilege implied by the code's kind. A notification follows.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with updated privileges
    /// - `Err(AppError::Validation)` - Email or code is empty
    /// - `Err(AppError::PromoErr(UserNotFound))` - No such user
    /// - `Err(AppError::PromoErr(InvalidOrUsed))` - Unknown or already consumed code
    pub async fn redeem(&self, email: &str, code: &str) -> Result<User, AppError> {
        let email = normalize_email(required("email", email)?);
        let code = required("code", code)?.to_string();

        let redemption = self
            .store
            .redeem_promo(RedeemPromoParam {
                email: email.clone(),
                code: code.clone(),
            })
            .await?;

        match redemption {
            Redemption::Redeemed { user, promo } => {
                info!(
                    email = %user.email,
                    code = %promo.code,
                    kind = promo.kind.as_str(),
                    "Promo code redeemed"
                );
                self.notifier.notify(format!(
                    "🎟 {} {} activated {} code {}",
                    user.badge(),
                    user.email,
                    promo.kind.as_str(),
                    promo.code
                ));
                Ok(user)
            }
            Redemption::UserNotFound => Err(PromoError::UserNotFound(email).into()),
            Redemption::InvalidOrUsed => Err(PromoError::InvalidOrUsed(code).into()),
        }
    }

    /// Creates an admin code when the store has no way to obtain admin access.
    ///
    /// Runs at startup. Nothing happens when an admin user or an unused admin code
    /// already exists.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - A new admin code was created
    /// - `Ok(None)` - No code was needed
    pub async fn bootstrap_admin_code(&self) -> Result<Option<String>, AppError> {
        if self.store.admin_exists().await?
            || self.store.unused_promo_exists(PromoKind::Admin).await?
        {
            return Ok(None);
        }

        let Some(promo) = self
            .store
            .create_promo(CreatePromoCodeParam {
                code: generate_random_code(),
                kind: PromoKind::Admin,
            })
            .await?
        else {
            warn!("Generated admin code collided with an existing code");
            return Ok(None);
        };

        Ok(Some(promo.code))
    }
}

/// Generates a random alphanumeric promo code.
///
/// Uses the thread-local CSPRNG over upper-case letters, lower-case letters and digits.
fn generate_random_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
