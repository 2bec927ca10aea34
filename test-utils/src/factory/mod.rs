//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let promo = factory::promo_code::PromoCodeFactory::new(&db)
//!     .code("WELCOME")
//!     .kind("admin")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Registered users
//! - `promo_code` - Promo codes, unused by default
//! - `access_log` - Access log records
//! - `photo` - Uploaded photo records
//! - `helpers` - Unique id generation

pub mod access_log;
pub mod helpers;
pub mod photo;
pub mod promo_code;
pub mod user;

pub use access_log::create_access_log;
pub use photo::create_photo;
pub use promo_code::create_promo_code;
pub use user::create_user;
