//! SeaORM entity models for every persisted record.

pub mod prelude;

pub mod access_log;
pub mod google_account;
pub mod photo;
pub mod promo_code;
pub mod user;
