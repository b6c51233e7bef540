//! # API crate — fullstack server functions for the Events app
//!
//! Defines every Dioxus server function the web frontend calls, along with
//! the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` (contents) | Google OAuth with PKCE, pending grant handling, session keys |
//! | [`models`] | — | `UserInfo` and `GoogleCallbackResponse`, shared by server and client |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - `get_current_user` — the user stored in the session, if any
//! - `google_login_url` — starts the Google flow, returns the consent-screen URL
//! - `google_callback` — completes the Google flow for a `code`/`state` pair
//! - `logout` — clears the session

use dioxus::prelude::*;

pub mod auth;
pub mod models;

pub use models::{GoogleCallbackResponse, UserInfo};

#[cfg(feature = "server")]
fn server_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    session
        .get(auth::SESSION_USER_KEY)
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Start a Google sign-in: remember the pending grant and return the consent URL.
#[cfg(feature = "server")]
#[get("/api/auth/google/url", session: tower_sessions::Session)]
pub async fn google_login_url() -> Result<String, ServerFnError> {
    let oauth = auth::GoogleOAuth::new().map_err(|e| {
        tracing::error!("Failed to create Google OAuth: {}", e);
        server_error(e)
    })?;

    let (url, grant) = oauth.authorize(chrono::Utc::now().timestamp());
    auth::store_pending_grant(&session, &grant)
        .await
        .map_err(server_error)?;

    Ok(url)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/google/url")]
pub async fn google_login_url() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Exchange the authorization code Google redirected back with.
#[cfg(feature = "server")]
#[post("/api/auth/google/callback", session: tower_sessions::Session)]
pub async fn google_callback(
    code: String,
    state: String,
) -> Result<GoogleCallbackResponse, ServerFnError> {
    let grant = auth::take_pending_grant(&session).await.map_err(|e| {
        tracing::error!("Google callback rejected: {}", e);
        server_error(e)
    })?;

    let oauth = auth::GoogleOAuth::new().map_err(server_error)?;
    let user = oauth
        .exchange_code(&code, &state, grant, chrono::Utc::now().timestamp())
        .await
        .map_err(|e| {
            tracing::error!("Google OAuth exchange error: {}", e);
            server_error(e)
        })?;

    auth::store_signed_in_user(&session, &user)
        .await
        .map_err(server_error)?;

    Ok(GoogleCallbackResponse { user })
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/google/callback")]
pub async fn google_callback(
    code: String,
    state: String,
) -> Result<GoogleCallbackResponse, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session.flush().await.map_err(server_error)?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}
