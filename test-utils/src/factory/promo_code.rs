//! Promo code factory for creating test promo code entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test promo codes with customizable fields.
///
/// Codes are unused by default. Calling `used_by` marks the code as consumed.
pub struct PromoCodeFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    kind: String,
    used_by: Option<String>,
}

impl<'a> PromoCodeFactory<'a> {
    /// Creates a new PromoCodeFactory with default values.
    ///
    /// Defaults:
    /// - code: `"CODE{id}"` where id is auto-incremented
    /// - kind: `"premium"`
    /// - unused
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("CODE{}", id),
            kind: "premium".to_string(),
            used_by: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Marks the code as already redeemed by `email`.
    pub fn used_by(mut self, email: impl Into<String>) -> Self {
        self.used_by = Some(email.into());
        self
    }

    /// Builds and inserts the promo code entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::promo_code::Model)` - Created promo code entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::promo_code::Model, DbErr> {
        let now = Utc::now();
        let used = self.used_by.is_some();

        entity::promo_code::ActiveModel {
            code: ActiveValue::Set(self.code),
            kind: ActiveValue::Set(self.kind),
            used: ActiveValue::Set(used),
            used_by: ActiveValue::Set(self.used_by),
            used_at: ActiveValue::Set(used.then_some(now)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unused premium promo code.
pub async fn create_promo_code(
    db: &DatabaseConnection,
) -> Result<entity::promo_code::Model, DbErr> {
    PromoCodeFactory::new(db).build().await
}
