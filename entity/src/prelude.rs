pub use super::access_log::Entity as AccessLog;
pub use super::google_account::Entity as GoogleAccount;
pub use super::photo::Entity as Photo;
pub use super::promo_code::Entity as PromoCode;
pub use super::user::Entity as User;
