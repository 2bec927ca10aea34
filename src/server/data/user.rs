//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing registered users. It handles
//! registration inserts, lookups by email, admin detection and the column-scoped
//! privilege grants applied by promo redemption.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};

use crate::server::{
    error::AppError,
    model::{
        promo::PromoKind,
        user::{CreateUserParam, Role, User},
    },
};

/// Repository providing database operations for user management.
///
/// Generic over the connection so the same queries run on a pooled connection or inside
/// a redemption transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a newly registered user with role `user` and no premium flag.
    ///
    /// # Arguments
    /// - `param` - Normalized email and password hash
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The created user
    /// - `Ok(None)` - A user with this email already exists
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<Option<User>, AppError> {
        let result = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(Role::User.as_str().to_string()),
            is_premium: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Ok(Some(User::from_entity(entity)?)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Finds a user by normalized email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether a bootstrap admin code is needed.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one user holds the admin role
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(AppError)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Applies the privilege of a promo kind to a user.
    ///
    /// Each kind writes only its own column, so concurrent grants of different kinds
    /// to the same user never overwrite each other.
    ///
    /// # Arguments
    /// - `email` - Normalized email of the user
    /// - `kind` - Kind of the consumed promo code
    ///
    /// # Returns
    /// - `Ok(())` - Grant applied (or no matching user found)
    /// - `Err(AppError)` - Database error during update
    pub async fn grant(&self, email: &str, kind: PromoKind) -> Result<(), AppError> {
        let update = entity::prelude::User::update_many()
            .filter(entity::user::Column::Email.eq(email));

        let update = match kind {
            PromoKind::Premium => update.col_expr(entity::user::Column::IsPremium, Expr::value(true)),
            PromoKind::Admin => update.col_expr(
                entity::user::Column::Role,
                Expr::value(Role::Admin.as_str()),
            ),
        };

        update.exec(self.db).await?;

        Ok(())
    }
}
