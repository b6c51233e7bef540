//! # User model shared by the server functions and the UI
//!
//! [`UserInfo`] is the only user representation in the app. It is
//! `Serialize + Deserialize + PartialEq` so it can cross the server/client
//! boundary via Dioxus server functions and be stored as-is in the server
//! session.
//!
//! - `id` — the provider subject (`sub` from Google) or, for local logins,
//!   the email address.
//! - `email`, `name`, `avatar_url` — profile fields.
//! - `provider` — `"google"` or `"local"`.
//!
//! [`GoogleCallbackResponse`] wraps the user returned after a successful
//! authorization code exchange.

use serde::{Deserialize, Serialize};

/// Provider tag for users created by the email form.
pub const LOCAL_PROVIDER: &str = "local";

/// Provider tag for users signed in through Google.
pub const GOOGLE_PROVIDER: &str = "google";

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
}

impl UserInfo {
    /// Build a user from the name and email typed into the login form.
    ///
    /// The password never reaches this type.
    pub fn local(name: impl Into<String>, email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            id: email.clone(),
            email,
            name: Some(name.into()),
            avatar_url: None,
            provider: LOCAL_PROVIDER.to_string(),
        }
    }

    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Result of exchanging a Google authorization code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleCallbackResponse {
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_user_has_no_password_field() {
        let user = UserInfo::local("Ann", "a@b.com");
        assert_eq!(user.id, "a@b.com");
        assert_eq!(user.provider, LOCAL_PROVIDER);

        let json = serde_json::to_value(&user).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert!(!keys.contains(&"password"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserInfo::local("Ann", "a@b.com");
        assert_eq!(user.display_name(), "Ann");

        user.name = None;
        assert_eq!(user.display_name(), "a@b.com");
    }

    #[test]
    fn test_callback_response_shape() {
        let json = r#"{"user":{"id":"1","email":"a@b.com","name":"Ann","avatar_url":null,"provider":"google"}}"#;
        let response: GoogleCallbackResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.name.as_deref(), Some("Ann"));
        assert_eq!(response.user.provider, GOOGLE_PROVIDER);
    }
}
