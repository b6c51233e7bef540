//! OAuth configuration from environment variables.

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use super::error::OAuthError;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Where Google sends the browser back to. The login view reads `code` and
/// `state` from this URL.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/login";

/// OAuth provider configuration.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
}

impl OAuthConfig {
    /// Create Google OAuth config from environment variables.
    pub fn google() -> Result<Self, OAuthError> {
        dotenvy::dotenv().ok();

        let client_id = std::env::var("GOOGLE_CLIENT_ID")
            .map_err(|_| OAuthError::MissingEnv("GOOGLE_CLIENT_ID"))?;
        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET")
            .map_err(|_| OAuthError::MissingEnv("GOOGLE_CLIENT_SECRET"))?;
        let redirect_uri = std::env::var("AUTH_REDIRECT_URI")
            .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string());

        Self::google_with(client_id, client_secret, redirect_uri)
    }

    /// Build a Google config from explicit values.
    pub fn google_with(
        client_id: String,
        client_secret: String,
        redirect_uri: String,
    ) -> Result<Self, OAuthError> {
        Ok(Self {
            client_id: ClientId::new(client_id),
            client_secret: ClientSecret::new(client_secret),
            auth_url: AuthUrl::new(GOOGLE_AUTH_URL.to_string())?,
            token_url: TokenUrl::new(GOOGLE_TOKEN_URL.to_string())?,
            redirect_url: RedirectUrl::new(redirect_uri)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_with_sets_endpoints() {
        let config = OAuthConfig::google_with(
            "client".to_string(),
            "secret".to_string(),
            DEFAULT_REDIRECT_URI.to_string(),
        )
        .unwrap();

        assert_eq!(config.client_id.as_str(), "client");
        assert_eq!(config.auth_url.as_str(), GOOGLE_AUTH_URL);
        assert_eq!(config.token_url.as_str(), GOOGLE_TOKEN_URL);
        assert_eq!(config.redirect_url.as_str(), "http://localhost:8080/login");
    }

    #[test]
    fn test_google_with_rejects_bad_redirect() {
        let err = OAuthConfig::google_with(
            "client".to_string(),
            "secret".to_string(),
            "not a url".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, OAuthError::InvalidUrl(_)));
    }
}
