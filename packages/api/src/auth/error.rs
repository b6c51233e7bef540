use thiserror::Error;

/// Errors raised by the server half of the Google sign-in flow.
#[derive(Debug, Error)]
pub enum OAuthError {
    #[error("{0} not set")]
    MissingEnv(&'static str),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] oauth2::url::ParseError),

    #[error("no pending Google sign-in for this session")]
    MissingGrant,

    #[error("OAuth state expired")]
    ExpiredGrant,

    #[error("OAuth state mismatch")]
    StateMismatch,

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}
