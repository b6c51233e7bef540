//! Authentication module for the Google OAuth provider.

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod error;
#[cfg(feature = "server")]
mod google;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use config::{OAuthConfig, DEFAULT_REDIRECT_URI};
#[cfg(feature = "server")]
pub use error::OAuthError;
#[cfg(feature = "server")]
pub use google::GoogleOAuth;
#[cfg(feature = "server")]
pub use session::{
    store_pending_grant, store_signed_in_user, take_pending_grant, PendingGrant, GRANT_TTL_SECS,
    SESSION_PENDING_GRANT_KEY, SESSION_USER_KEY,
};
