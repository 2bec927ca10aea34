//! Request and response DTOs shared by the HTTP API.
//!
//! DTOs define the JSON wire format. Field names follow the camelCase shape existing
//! clients already send and expect (`isPremium`, `usedBy`, `createdAt`), except where a
//! field mirrors an upstream name such as the image host's `public_id`.

pub mod access_log;
pub mod api;
pub mod auth;
pub mod photo;
pub mod promo;
pub mod user;
