pub mod access_log;
pub mod auth;
pub mod health;
pub mod photo;
pub mod promo;
pub mod user;
