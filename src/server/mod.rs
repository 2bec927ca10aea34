//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints, business
//! logic, persistence and the clients for external providers. The backend uses Axum as
//! the web framework, SeaORM (or a JSON document) for persistence, reqwest for Telegram,
//! Google and Cloudinary calls, and tower-sessions for cookie sessions.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and calls to external providers
//! - **Data Layer** (`data/`) - The `Store` trait, its backends and per-entity repositories
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store, HTTP clients, providers)
//! - **Startup** (`startup`) - Initialization of persistence, sessions, and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the session and checks permissions where required
//! 3. **Controller** converts DTOs to params, calls service
//! 4. **Service** applies business rules, reads and writes through the `Store`
//! 5. **Service** fires detached notifications and returns a domain model
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
