//! OAuth2 login with Google.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::server::{
    data::store::Store,
    error::{auth::AuthError, AppError},
    model::google::{GoogleAccount, UpsertGoogleAccountParam},
    state::OAuth2Client,
};

const SCOPES: [&str; 3] = ["openid", "email", "profile"];

/// Profile returned by Google's OpenID Connect userinfo endpoint.
#[derive(Deserialize)]
struct GoogleProfile {
    sub: String,
    name: Option<String>,
    email: Option<String>,
    picture: Option<String>,
}

impl GoogleProfile {
    fn into_param(self) -> UpsertGoogleAccountParam {
        let display_name = self
            .name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Google user".to_string());

        UpsertGoogleAccountParam {
            google_id: self.sub,
            display_name,
            email: self.email,
            avatar_url: self.picture,
        }
    }
}

pub struct GoogleAuthService<'a> {
    store: &'a dyn Store,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    userinfo_url: &'a str,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(
        store: &'a dyn Store,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            store,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Builds the Google consent URL and the CSRF state to remember in the session.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .url()
    }

    /// Completes sign-in after Google redirected back.
    ///
    /// Exchanges the authorization code for an access token, reads the profile and
    /// inserts or refreshes the matching Google account.
    ///
    /// # Arguments
    /// - `authorization_code` - `code` query parameter of the callback
    ///
    /// # Returns
    /// - `Ok(GoogleAccount)` - The signed-in account
    /// - `Err(AppError::AuthErr(ProviderFailure))` - Token exchange or profile fetch failed
    pub async fn callback(&self, authorization_code: String) -> Result<GoogleAccount, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::ProviderFailure(err.to_string()))?;

        let profile = self.fetch_profile(&token).await?;
        let account = self.store.upsert_google_account(profile.into_param()).await?;

        info!(google_id = %account.google_id, "Google sign-in");

        Ok(account)
    }

    /// Retrieves the Google profile using the provided access token.
    async fn fetch_profile(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GoogleProfile, AppError> {
        let access_token = token.access_token().secret();

        let response = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|err| AuthError::ProviderFailure(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::ProviderFailure(format!(
                "Google userinfo responded with {}",
                response.status()
            ))
            .into());
        }

        let profile = response
            .json::<GoogleProfile>()
            .await
            .map_err(|err| AuthError::ProviderFailure(err.to_string()))?;

        Ok(profile)
    }
}
