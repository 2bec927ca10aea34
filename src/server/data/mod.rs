//! Persistence layer.
//!
//! The `Store` trait is the single persistence interface the services depend on. Two
//! backends implement it: `DatabaseStore`, built from per-entity SeaORM repositories, and
//! `JsonFileStore`, which keeps the whole document in one JSON file. Repositories use
//! SeaORM entity models internally and return domain models to keep the data layer
//! separate from business logic.

pub mod access_log;
pub mod database;
pub mod google_account;
pub mod json;
pub mod photo;
pub mod promo_code;
pub mod store;
pub mod user;

#[cfg(test)]
mod test;
