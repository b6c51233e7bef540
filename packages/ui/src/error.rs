//! Error types for the login flows.
//!
//! [`LoginError`] is what the user sees: its `Display` is the exact message
//! shown above the form. The other two enums describe collaborator failures
//! and are only logged.

use std::time::Duration;

use dioxus::prelude::ServerFnError;
use thiserror::Error;

/// User-facing failure of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Failed to complete Google sign-in")]
    GoogleCallback,

    #[error("Failed to initiate Google sign-in")]
    GoogleInitiation,
}

/// The session sink refused a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("user has no email address")]
    MissingEmail,
}

/// Failure talking to the OAuth provider client.
#[derive(Debug, Error)]
pub enum AuthClientError {
    #[error("server error: {0}")]
    Server(String),

    #[error("no browser window to redirect")]
    NoWindow,

    #[error("redirect failed: {0}")]
    Redirect(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

impl From<ServerFnError> for AuthClientError {
    fn from(e: ServerFnError) -> Self {
        AuthClientError::Server(e.to_string())
    }
}
