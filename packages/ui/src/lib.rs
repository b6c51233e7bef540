//! This crate contains all shared UI for the workspace: the auth context,
//! the login form controller and the Google redirect flow.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
    pub use dioxus_free_icons::icons::fa_solid_icons::{FaRightFromBracket, FaRightToBracket};
}

mod auth;
pub use auth::{
    use_auth, use_auth_session, AuthProvider, AuthSession, AuthState, LogoutButton, Navigate,
    SessionSink, LANDING_ROUTE, LOGIN_ROUTE,
};

mod client;
pub use client::{GoogleAuthClient, ServerAuthClient, TimedClient};

mod error;
pub use error::{AuthClientError, LoginError, SessionError};

mod google_button;
pub use google_button::GoogleSignInButton;

pub mod login_form;
pub use login_form::{Field, FormState, LoginForm, LoginMode, Phase};

mod mount;
pub use mount::MountToken;

pub mod oauth_redirect;
pub use oauth_redirect::{
    begin_google_sign_in, finish_google_sign_in, CodeClaim, Completion, RedirectGuard,
    RedirectParams,
};

mod timeout;
pub use timeout::{with_timeout, EXTERNAL_CALL_TIMEOUT};
