//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - The record store (SQL database or JSON document)
//! - HTTP client for Google and Cloudinary requests
//! - OAuth2 client for Google sign-in
//! - Telegram notifier and image host
//! - Client URL and access log presentation settings

use chrono::FixedOffset;
use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use std::sync::Arc;

use crate::server::{
    data::store::Store,
    service::{image_host::ImageHost, notifier::TelegramNotifier},
};

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: trait objects sit behind `Arc`, `reqwest::Client`
/// and `TelegramNotifier` share their internals, and `OAuth2Client` is designed to be
/// cloned.
#[derive(Clone)]
pub struct AppState {
    /// Record store selected by `STORAGE_BACKEND`.
    pub store: Arc<dyn Store>,

    /// HTTP client for external API requests.
    ///
    /// Configured without redirects to prevent SSRF through provider responses.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google sign-in flow.
    pub oauth_client: OAuth2Client,

    /// Fire-and-forget Telegram notifications.
    pub notifier: TelegramNotifier,

    /// Storage provider for uploaded photos.
    pub image_host: Arc<dyn ImageHost>,

    /// Google OpenID Connect userinfo endpoint.
    pub google_userinfo_url: String,

    /// Where the browser is sent after sign-in and logout.
    pub client_url: String,

    /// Default number of access logs returned by `GET /api/logs`.
    pub log_limit: u64,

    /// Offset used to render access log timestamps.
    pub log_offset: FixedOffset,
}
