//! Promo code data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};

use crate::server::{
    error::AppError,
    model::promo::{CreatePromoCodeParam, PromoCode, PromoKind},
};

pub struct PromoCodeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PromoCodeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new unused promo code.
    ///
    /// # Returns
    /// - `Ok(Some(PromoCode))` - The created code
    /// - `Ok(None)` - The code string is already taken
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreatePromoCodeParam) -> Result<Option<PromoCode>, AppError> {
        let result = entity::promo_code::ActiveModel {
            code: ActiveValue::Set(param.code),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            used: ActiveValue::Set(false),
            used_by: ActiveValue::Set(None),
            used_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Ok(Some(PromoCode::from_entity(entity)?)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<PromoCode>, AppError> {
        let entity = entity::prelude::PromoCode::find()
            .filter(entity::promo_code::Column::Code.eq(code))
            .one(self.db)
            .await?;

        entity.map(PromoCode::from_entity).transpose()
    }

    /// Checks whether at least one unused code of the given kind exists.
    pub async fn unused_exists(&self, kind: PromoKind) -> Result<bool, AppError> {
        let count = entity::prelude::PromoCode::find()
            .filter(entity::promo_code::Column::Kind.eq(kind.as_str()))
            .filter(entity::promo_code::Column::Used.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Marks an unused code as consumed by `email`.
    ///
    /// The `used = false` filter is part of the UPDATE itself, so of several concurrent
    /// callers at most one sees an affected row.
    ///
    /// # Returns
    /// - `Ok(true)` - This call consumed the code
    /// - `Ok(false)` - Code unknown or already used; nothing changed
    /// - `Err(AppError)` - Database error during update
    pub async fn consume(
        &self,
        code: &str,
        email: &str,
        used_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::PromoCode::update_many()
            .col_expr(entity::promo_code::Column::Used, Expr::value(true))
            .col_expr(entity::promo_code::Column::UsedBy, Expr::value(email))
            .col_expr(entity::promo_code::Column::UsedAt, Expr::value(used_at))
            .filter(entity::promo_code::Column::Code.eq(code))
            .filter(entity::promo_code::Column::Used.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
