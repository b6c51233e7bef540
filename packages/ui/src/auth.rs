//! Authentication context, session sink and navigation seams for the UI.

use api::UserInfo;
use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::error::SessionError;
use crate::icons::FaRightFromBracket;
use crate::Icon;

/// Route shown right after a successful sign-in.
pub const LANDING_ROUTE: &str = "/events";

/// Route of the login view.
pub const LOGIN_ROUTE: &str = "/login";

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// State after `user` signs in. A user without an email cannot hold a session.
    pub fn signed_in(user: UserInfo) -> Result<Self, SessionError> {
        if user.email.trim().is_empty() {
            return Err(SessionError::MissingEmail);
        }
        Ok(Self {
            user: Some(user),
            loading: false,
        })
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }
}

/// Receives a successful login and makes the user visible to the rest of the app.
pub trait SessionSink {
    fn login(&mut self, user: UserInfo) -> Result<(), SessionError>;
    fn logout(&mut self);
}

/// Changes the current view.
pub trait Navigate {
    fn navigate(&mut self, path: &str);
}

impl Navigate for Navigator {
    fn navigate(&mut self, path: &str) {
        self.push(path.to_string());
    }
}

/// [`SessionSink`] over the [`AuthState`] signal provided by [`AuthProvider`].
#[derive(Clone, Copy)]
pub struct AuthSession(Signal<AuthState>);

impl AuthSession {
    pub fn new(state: Signal<AuthState>) -> Self {
        Self(state)
    }
}

impl SessionSink for AuthSession {
    fn login(&mut self, user: UserInfo) -> Result<(), SessionError> {
        let state = AuthState::signed_in(user)?;
        self.0.set(state);
        Ok(())
    }

    fn logout(&mut self) {
        self.0.set(AuthState::signed_out());
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Session sink for the current component.
pub fn use_auth_session() -> AuthSession {
    AuthSession::new(use_auth())
}

/// Provider component that owns the process-wide authentication state.
/// Wrap your app with this component at the root.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore a server session (Google sign-in) on mount
    let _ = use_resource(move || async move {
        let restored = match api::get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Failed to restore session: {}", e);
                None
            }
        };
        // A local login may have landed while the request was in flight
        if auth_state.peek().loading {
            auth_state.set(AuthState {
                user: restored,
                loading: false,
            });
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_auth_session();
    let mut nav = use_navigator();

    let onclick = move |_| async move {
        if let Err(e) = api::logout().await {
            tracing::error!("Failed to clear server session: {}", e);
        }
        session.logout();
        nav.navigate(LOGIN_ROUTE);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_signed_in_keeps_user() {
        let user = UserInfo::local("Ann", "a@b.com");
        let state = AuthState::signed_in(user.clone()).unwrap();
        assert_eq!(state.user, Some(user));
        assert!(!state.loading);
    }

    #[test]
    fn test_signed_in_rejects_blank_email() {
        let user = UserInfo::local("Ann", "  ");
        assert_eq!(
            AuthState::signed_in(user).unwrap_err(),
            SessionError::MissingEmail
        );
    }

    #[test]
    fn test_signed_out() {
        assert_eq!(
            AuthState::signed_out(),
            AuthState {
                user: None,
                loading: false
            }
        );
    }
}
