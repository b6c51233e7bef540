//! Session keys and the pending Google grant.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use super::error::OAuthError;
use crate::models::UserInfo;

/// Key for storing the signed-in [`UserInfo`](crate::UserInfo) in session.
pub const SESSION_USER_KEY: &str = "user";

/// Key for the [`PendingGrant`] between the authorization URL and the callback.
pub const SESSION_PENDING_GRANT_KEY: &str = "google_pending_grant";

/// How long a pending grant stays redeemable.
pub const GRANT_TTL_SECS: i64 = 10 * 60;

/// CSRF state and PKCE verifier issued with an authorization URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingGrant {
    pub csrf_state: String,
    pub pkce_verifier: String,
    /// Unix seconds.
    pub issued_at: i64,
}

impl PendingGrant {
    pub fn new(csrf_state: String, pkce_verifier: String, issued_at: i64) -> Self {
        Self {
            csrf_state,
            pkce_verifier,
            issued_at,
        }
    }

    /// Consume the grant for a callback carrying `state`, returning the PKCE verifier.
    pub fn redeem(self, state: &str, now: i64) -> Result<String, OAuthError> {
        if now - self.issued_at > GRANT_TTL_SECS {
            return Err(OAuthError::ExpiredGrant);
        }
        if self.csrf_state != state {
            return Err(OAuthError::StateMismatch);
        }
        Ok(self.pkce_verifier)
    }
}

/// Remember the grant issued with a new authorization URL.
pub async fn store_pending_grant(session: &Session, grant: &PendingGrant) -> Result<(), OAuthError> {
    session.insert(SESSION_PENDING_GRANT_KEY, grant).await?;
    Ok(())
}

/// Take the pending grant out of the session.
///
/// The grant is removed even when the exchange that follows fails, so a
/// second callback for the same sign-in finds nothing.
pub async fn take_pending_grant(session: &Session) -> Result<PendingGrant, OAuthError> {
    let grant: Option<PendingGrant> = session.remove(SESSION_PENDING_GRANT_KEY).await?;
    grant.ok_or(OAuthError::MissingGrant)
}

/// Store the signed-in user under a fresh session id.
pub async fn store_signed_in_user(session: &Session, user: &UserInfo) -> Result<(), OAuthError> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_KEY, user).await?;
    Ok(())
}
