//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models (or JSON file records) at the store boundary and transformed to DTOs at the
//! controller boundary.

pub mod access_log;
pub mod google;
pub mod photo;
pub mod promo;
pub mod user;
