//! User domain models and parameters.
//!
//! Provides the registered user with its privilege set (single-valued role plus the
//! premium flag) and the additive grant rule applied on promo redemption.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::user::{CredentialsDto, RoleDto, UserDto},
    server::{
        error::{internal::InternalError, AppError},
        model::promo::PromoKind,
    },
};

/// Single-valued role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Stored and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    pub fn into_dto(self) -> RoleDto {
        match self {
            Self::User => RoleDto::User,
            Self::Admin => RoleDto::Admin,
        }
    }
}

impl FromStr for Role {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(InternalError::UnknownStoredValue {
                field: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// Emoji badge shown in chat notifications for a privilege set.
///
/// Admin wins over premium; unknown users fall back to the plain user badge.
pub fn badge(role: Role, is_premium: bool) -> &'static str {
    match (role, is_premium) {
        (Role::Admin, _) => "👑",
        (Role::User, true) => "💎",
        (Role::User, false) => "👤",
    }
}

/// Registered user with hashed credentials and privileges.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Normalized (trimmed, lower-cased) email, unique across users.
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: Role,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored role is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            role: entity.role.parse()?,
            is_premium: entity.is_premium,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            email: self.email,
            role: self.role.into_dto(),
            is_premium: self.is_premium,
            created_at: self.created_at,
        }
    }

    /// Applies the privilege carried by a promo code.
    ///
    /// Grants only ever widen the privilege set: premium sets the flag and leaves the
    /// role alone, admin sets the role and leaves the flag alone.
    pub fn grant(&mut self, kind: PromoKind) {
        match kind {
            PromoKind::Premium => self.is_premium = true,
            PromoKind::Admin => self.role = Role::Admin,
        }
    }

    pub fn badge(&self) -> &'static str {
        badge(self.role, self.is_premium)
    }
}

/// Parameters for inserting a freshly registered user.
///
/// New users always start with role `user` and no premium flag.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
}

/// Raw credentials submitted for registration or login.
#[derive(Debug, Clone)]
pub struct CredentialsParam {
    pub email: String,
    pub password: String,
}

impl From<CredentialsDto> for CredentialsParam {
    fn from(dto: CredentialsDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
