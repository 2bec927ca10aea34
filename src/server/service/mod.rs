//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the `Store`. They are
//! responsible for:
//!
//! - **Business Logic**: Validation, normalization and the promo/role rules
//! - **Orchestration**: Coordinating store calls with external providers
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Notifications**: Firing detached operator notifications after state changes

pub mod access_log;
pub mod image_host;
pub mod notifier;
pub mod oauth;
pub mod photo;
pub mod promo;
pub mod user;

#[cfg(test)]
mod test;
