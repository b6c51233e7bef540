//! # Google OAuth 2.0 implementation
//!
//! Implements the Google Authorization Code flow with PKCE. Nothing is stored
//! in a database: the CSRF state and PKCE verifier travel in the server
//! session as a [`PendingGrant`] between the two halves of the flow.
//!
//! ## Flow
//!
//! 1. **[`authorize`](GoogleOAuth::authorize)** — builds an authorization URL
//!    requesting `openid`, `email`, and `profile` scopes with a random PKCE
//!    challenge and CSRF state, and returns the [`PendingGrant`] the caller
//!    must keep in the session.
//!
//! 2. **[`exchange_code`](GoogleOAuth::exchange_code)** — called by the
//!    `google_callback` server function once the login view picks the `code`
//!    and `state` out of its URL. It:
//!    - Redeems the pending grant (state match and 10-minute expiry).
//!    - Exchanges the authorization code + PKCE verifier for an access token.
//!    - Fetches the user's profile from the Google userinfo endpoint and
//!      returns it as a [`UserInfo`].

use oauth2::basic::BasicClient;
use oauth2::{
    AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, PkceCodeChallenge,
    PkceCodeVerifier, Scope, TokenResponse,
};
use reqwest::Client;
use serde::Deserialize;

use super::config::OAuthConfig;
use super::error::OAuthError;
use super::session::PendingGrant;
use crate::models::{UserInfo, GOOGLE_PROVIDER};

const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Google user info from API.
#[derive(Debug, Deserialize)]
struct GoogleUser {
    id: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
}

impl From<GoogleUser> for UserInfo {
    fn from(user: GoogleUser) -> Self {
        UserInfo {
            id: user.id,
            email: user.email,
            name: user.name,
            avatar_url: user.picture,
            provider: GOOGLE_PROVIDER.to_string(),
        }
    }
}

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Google OAuth handler.
pub struct GoogleOAuth {
    config: OAuthConfig,
}

impl GoogleOAuth {
    /// Create a new Google OAuth handler from the environment.
    pub fn new() -> Result<Self, OAuthError> {
        Ok(Self::with_config(OAuthConfig::google()?))
    }

    pub fn with_config(config: OAuthConfig) -> Self {
        Self { config }
    }

    fn create_client(&self) -> ConfiguredClient {
        BasicClient::new(self.config.client_id.clone())
            .set_client_secret(self.config.client_secret.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
    }

    /// Generate an authorization URL with PKCE.
    pub fn authorize(&self, now: i64) -> (String, PendingGrant) {
        let client = self.create_client();
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        let grant = PendingGrant::new(
            csrf_state.secret().clone(),
            pkce_verifier.secret().clone(),
            now,
        );
        (auth_url.to_string(), grant)
    }

    /// Exchange an authorization code for tokens and get user info.
    pub async fn exchange_code(
        &self,
        code: &str,
        state: &str,
        grant: PendingGrant,
        now: i64,
    ) -> Result<UserInfo, OAuthError> {
        let pkce_verifier = grant.redeem(state, now)?;

        // Token endpoint must not follow redirects
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let token_result = self
            .create_client()
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
            .request_async(&http_client)
            .await
            .map_err(|e| OAuthError::TokenExchange(e.to_string()))?;

        let access_token = token_result.access_token().secret();

        let google_user: GoogleUser = Client::new()
            .get(USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(google_user.into())
    }
}
