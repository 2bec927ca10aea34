use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        promo::PromoKind,
        user::{CreateUserParam, Role},
    },
};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod admin_exists;
mod find_by_email;
mod grant;
