//! # Google redirect handling
//!
//! Two halves of the Google flow as seen from the login view:
//!
//! - [`begin_google_sign_in`] asks the client to send the browser to Google.
//! - When Google sends the browser back, the view builds [`RedirectParams`]
//!   from its query string, [`claims`](RedirectParams::claim) the code
//!   against a [`RedirectGuard`] and runs [`finish_google_sign_in`] with the
//!   claim.
//!
//! The guard remembers every code it handed out, so re-running the view's
//! effect with the same URL never exchanges a code twice. Every result is
//! checked against a [`MountToken`] before it touches the session, the
//! router or the form.

use std::collections::HashSet;

use crate::auth::{Navigate, SessionSink, LANDING_ROUTE};
use crate::client::GoogleAuthClient;
use crate::error::LoginError;
use crate::mount::MountToken;

/// Query parameters Google appends to the redirect URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

impl RedirectParams {
    /// Router query segments default to `""` when absent.
    pub fn from_query(code: &str, state: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            code: non_empty(code),
            state: non_empty(state),
        }
    }

    /// The code to exchange, unless there is none or `guard` has seen it.
    pub fn claim(&self, guard: &mut RedirectGuard) -> Option<CodeClaim> {
        let code = self.code.as_deref()?;
        if !guard.consumed.insert(code.to_string()) {
            return None;
        }
        Some(CodeClaim {
            code: code.to_string(),
            state: self.state.clone().unwrap_or_default(),
        })
    }
}

/// Codes already exchanged by one mounted view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectGuard {
    consumed: HashSet<String>,
}

/// An authorization code this view is allowed to exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeClaim {
    pub code: String,
    pub state: String,
}

/// How an async sign-in step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Done,
    Failed(LoginError),
    /// The view unmounted while the call was in flight; nothing was applied.
    Discarded,
}

/// Exchange a claimed code, log the user in and go to the landing route.
pub async fn finish_google_sign_in<C, S, N>(
    claim: CodeClaim,
    client: &C,
    sink: &mut S,
    nav: &mut N,
    mount: &MountToken,
) -> Completion
where
    C: GoogleAuthClient,
    S: SessionSink,
    N: Navigate,
{
    let result = client
        .handle_google_callback(&claim.code, &claim.state)
        .await;

    if !mount.is_mounted() {
        return Completion::Discarded;
    }

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Google callback error: {}", e);
            return Completion::Failed(LoginError::GoogleCallback);
        }
    };

    if let Err(e) = sink.login(response.user) {
        tracing::error!("Google user rejected by session: {}", e);
        return Completion::Failed(LoginError::GoogleCallback);
    }

    nav.navigate(LANDING_ROUTE);
    Completion::Done
}

/// Start the redirect to Google's consent screen.
pub async fn begin_google_sign_in<C: GoogleAuthClient>(client: &C, mount: &MountToken) -> Completion {
    let result = client.sign_in_with_google().await;

    if !mount.is_mounted() {
        return Completion::Discarded;
    }

    match result {
        Ok(()) => Completion::Done,
        Err(e) => {
            tracing::error!("Google sign-in error: {}", e);
            Completion::Failed(LoginError::GoogleInitiation)
        }
    }
}
