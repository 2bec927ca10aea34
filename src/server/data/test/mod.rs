mod access_log;
mod photo;
mod promo_code;
mod store;
mod user;
