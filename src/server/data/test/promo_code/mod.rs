use crate::server::{
    data::promo_code::PromoCodeRepository,
    error::AppError,
    model::promo::{CreatePromoCodeParam, PromoKind},
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory::promo_code::PromoCodeFactory};

mod consume;
mod create;
mod unused_exists;
