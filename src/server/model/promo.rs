//! Promo code domain models and parameters.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::promo::PromoKindDto,
    server::{
        error::{internal::InternalError, AppError},
        model::user::User,
    },
};

/// Privilege tier granted by a promo code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoKind {
    Premium,
    Admin,
}

impl PromoKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Admin => "admin",
        }
    }

    pub fn into_dto(self) -> PromoKindDto {
        match self {
            Self::Premium => PromoKindDto::Premium,
            Self::Admin => PromoKindDto::Admin,
        }
    }
}

impl FromStr for PromoKind {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "premium" => Ok(Self::Premium),
            "admin" => Ok(Self::Admin),
            other => Err(InternalError::UnknownStoredValue {
                field: "promo kind",
                value: other.to_string(),
            }),
        }
    }
}

/// Single-use promo code.
///
/// `used` flips from `false` to `true` exactly once, at which point `used_by` and
/// `used_at` are set. There is no path back.
#[derive(Debug, Clone, PartialEq)]
pub struct PromoCode {
    pub id: i32,
    pub code: String,
    pub kind: PromoKind,
    pub used: bool,
    pub used_by: Option<String>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl PromoCode {
    pub fn from_entity(entity: entity::promo_code::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            code: entity.code,
            kind: entity.kind.parse()?,
            used: entity.used,
            used_by: entity.used_by,
            used_at: entity.used_at,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for inserting a new, unused promo code.
#[derive(Debug, Clone)]
pub struct CreatePromoCodeParam {
    pub code: String,
    pub kind: PromoKind,
}

/// Parameters for redeeming a code on behalf of a registered user.
#[derive(Debug, Clone)]
pub struct RedeemPromoParam {
    /// Normalized email of the redeeming user.
    pub email: String,
    pub code: String,
}

/// Outcome of an atomic redemption attempt at the store level.
#[derive(Debug, Clone, PartialEq)]
pub enum Redemption {
    /// The code was consumed and the user's privileges widened.
    Redeemed { user: User, promo: PromoCode },
    /// No user is registered under the email; nothing was changed.
    UserNotFound,
    /// The code does not exist or was already consumed; nothing was changed.
    InvalidOrUsed,
}
