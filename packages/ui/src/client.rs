//! OAuth provider client used by the login view.
//!
//! [`GoogleAuthClient`] is the seam; [`ServerAuthClient`] implements it with
//! the `api` server functions, and [`TimedClient`] bounds any implementation
//! with a time limit.

use std::future::Future;
use std::time::Duration;

use api::GoogleCallbackResponse;

use crate::error::AuthClientError;
use crate::timeout::{with_timeout, EXTERNAL_CALL_TIMEOUT};

/// Starts and completes the Google redirect flow.
pub trait GoogleAuthClient {
    /// Send the browser to Google's consent screen.
    fn sign_in_with_google(&self) -> impl Future<Output = Result<(), AuthClientError>>;

    /// Exchange the `code`/`state` pair Google redirected back with.
    fn handle_google_callback(
        &self,
        code: &str,
        state: &str,
    ) -> impl Future<Output = Result<GoogleCallbackResponse, AuthClientError>>;
}

/// Client backed by the fullstack server functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerAuthClient;

impl GoogleAuthClient for ServerAuthClient {
    async fn sign_in_with_google(&self) -> Result<(), AuthClientError> {
        let url = api::google_login_url().await?;
        redirect_to(&url)
    }

    async fn handle_google_callback(
        &self,
        code: &str,
        state: &str,
    ) -> Result<GoogleCallbackResponse, AuthClientError> {
        Ok(api::google_callback(code.to_string(), state.to_string()).await?)
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect_to(url: &str) -> Result<(), AuthClientError> {
    let window = web_sys::window().ok_or(AuthClientError::NoWindow)?;
    window
        .location()
        .set_href(url)
        .map_err(|e| AuthClientError::Redirect(format!("{e:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to(url: &str) -> Result<(), AuthClientError> {
    tracing::debug!("No browser window to open {}", url);
    Err(AuthClientError::NoWindow)
}

/// Wraps a client so every call fails with [`AuthClientError::Timeout`] past `limit`.
#[derive(Debug, Clone)]
pub struct TimedClient<C> {
    inner: C,
    limit: Duration,
}

impl<C> TimedClient<C> {
    pub fn new(inner: C) -> Self {
        Self::with_limit(inner, EXTERNAL_CALL_TIMEOUT)
    }

    pub fn with_limit(inner: C, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

impl<C: GoogleAuthClient> GoogleAuthClient for TimedClient<C> {
    async fn sign_in_with_google(&self) -> Result<(), AuthClientError> {
        with_timeout(self.limit, self.inner.sign_in_with_google())
            .await
            .map_err(AuthClientError::Timeout)?
    }

    async fn handle_google_callback(
        &self,
        code: &str,
        state: &str,
    ) -> Result<GoogleCallbackResponse, AuthClientError> {
        with_timeout(self.limit, self.inner.handle_google_callback(code, state))
            .await
            .map_err(AuthClientError::Timeout)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stalled;

    impl GoogleAuthClient for Stalled {
        async fn sign_in_with_google(&self) -> Result<(), AuthClientError> {
            futures::future::pending().await
        }

        async fn handle_google_callback(
            &self,
            _code: &str,
            _state: &str,
        ) -> Result<GoogleCallbackResponse, AuthClientError> {
            futures::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_timed_client_bounds_both_calls() {
        let client = TimedClient::with_limit(Stalled, Duration::from_millis(5));

        let err = client.sign_in_with_google().await.unwrap_err();
        assert!(matches!(err, AuthClientError::Timeout(_)));

        let err = client.handle_google_callback("c", "s").await.unwrap_err();
        assert!(matches!(err, AuthClientError::Timeout(d) if d == Duration::from_millis(5)));
    }

    #[test]
    fn test_server_error_conversion() {
        let err: AuthClientError = dioxus::prelude::ServerFnError::new("boom").into();
        assert!(matches!(err, AuthClientError::Server(ref msg) if msg.contains("boom")));
    }
}
