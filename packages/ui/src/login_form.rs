//! # Login form controller
//!
//! Framework-free state of the login/signup form: the three text fields, the
//! error shown above them, and the submit contract. The view keeps a
//! [`LoginForm`] in a signal and forwards input and submit events to it.
//!
//! ## Submit
//!
//! 1. The previous error is cleared.
//! 2. `name`, `email` and `password` must be non-empty after trimming,
//!    otherwise the error becomes [`LoginError::MissingFields`] and nothing
//!    else happens.
//! 3. A local [`UserInfo`] is built from `name` and `email` only. The
//!    password is collected but never forwarded: this path is a local login,
//!    not a verified one.
//! 4. The user goes to the [`SessionSink`]; on success the view navigates to
//!    [`LANDING_ROUTE`]. A sink failure becomes
//!    [`LoginError::InvalidCredentials`] and navigation is skipped.
//!
//! A failed submit can be retried by submitting again.

use std::fmt;
use std::str::FromStr;

use api::UserInfo;

use crate::auth::{Navigate, SessionSink, LANDING_ROUTE};
use crate::error::LoginError;

/// One of the form's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// The input's `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// Values typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    /// Whitespace-only counts as empty.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.password]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Error,
    Authenticated,
}

/// Whether the card presents itself as a login or a signup.
///
/// Both modes submit the same way; only the labels change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    Login,
    Signup,
}

impl LoginMode {
    pub fn title(self) -> &'static str {
        match self {
            LoginMode::Login => "Login",
            LoginMode::Signup => "Sign Up",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            LoginMode::Login => LoginMode::Signup,
            LoginMode::Signup => LoginMode::Login,
        }
    }

    pub fn toggle_prompt(self) -> (&'static str, &'static str) {
        match self {
            LoginMode::Login => ("Don't have an account? ", "Sign up"),
            LoginMode::Signup => ("Already have an account? ", "Log in"),
        }
    }
}

/// State of one mounted login view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    form: FormState,
    error: Option<LoginError>,
    phase: Phase,
    mode: LoginMode,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn error(&self) -> Option<LoginError> {
        self.error
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// Update the field whose input is called `name`. Unknown names are ignored.
    pub fn on_field_change(&mut self, name: &str, value: impl Into<String>) {
        match name.parse::<Field>() {
            Ok(field) => self.set_field(field, value),
            Err(e) => tracing::debug!("Ignoring input change: {}", e),
        }
    }

    /// Start a submission, redirect, or Google sign-in attempt.
    pub fn begin_attempt(&mut self) {
        self.error = None;
        self.phase = Phase::Validating;
    }

    pub fn set_error(&mut self, error: LoginError) {
        self.error = Some(error);
        self.phase = Phase::Error;
    }

    /// Mark the form authenticated by another path (Google redirect).
    pub fn mark_authenticated(&mut self) {
        self.error = None;
        self.phase = Phase::Authenticated;
    }

    /// Validate and log in with the local user built from the form.
    pub fn submit<S, N>(&mut self, sink: &mut S, nav: &mut N) -> Result<(), LoginError>
    where
        S: SessionSink,
        N: Navigate,
    {
        self.begin_attempt();

        if !self.form.is_complete() {
            self.set_error(LoginError::MissingFields);
            return Err(LoginError::MissingFields);
        }

        // Same trimmed values the completeness check saw
        let user = UserInfo::local(self.form.name.trim(), self.form.email.trim());

        if let Err(e) = sink.login(user) {
            tracing::error!("Local login rejected: {}", e);
            self.set_error(LoginError::InvalidCredentials);
            return Err(LoginError::InvalidCredentials);
        }

        self.phase = Phase::Authenticated;
        nav.navigate(LANDING_ROUTE);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::SessionError;

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub logins: Vec<UserInfo>,
        pub fail: bool,
    }

    impl SessionSink for RecordingSink {
        fn login(&mut self, user: UserInfo) -> Result<(), SessionError> {
            self.logins.push(user);
            if self.fail {
                return Err(SessionError::MissingEmail);
            }
            Ok(())
        }

        fn logout(&mut self) {}
    }

    #[derive(Default)]
    pub(crate) struct RecordingNav {
        pub paths: Vec<String>,
    }

    impl Navigate for RecordingNav {
        fn navigate(&mut self, path: &str) {
            self.paths.push(path.to_string());
        }
    }

    fn filled(name: &str, email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.on_field_change("name", name);
        form.on_field_change("email", email);
        form.on_field_change("password", password);
        form
    }

    #[test]
    fn test_field_change_touches_one_field() {
        let mut form = filled("Ann", "old@b.com", "pw");
        form.on_field_change("email", "x@y.com");

        assert_eq!(form.form().email, "x@y.com");
        assert_eq!(form.form().name, "Ann");
        assert_eq!(form.form().password, "pw");
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = filled("Ann", "a@b.com", "pw");
        let before = form.form().clone();
        form.on_field_change("nickname", "annie");
        assert_eq!(form.form(), &before);
    }

    #[test]
    fn test_field_round_trips_through_name() {
        for field in [Field::Name, Field::Email, Field::Password] {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_missing_name_blocks_submit() {
        let mut form = filled("", "a@b.com", "pw");
        let mut sink = RecordingSink::default();
        let mut nav = RecordingNav::default();

        assert_eq!(
            form.submit(&mut sink, &mut nav),
            Err(LoginError::MissingFields)
        );
        assert_eq!(
            form.error().map(|e| e.to_string()).as_deref(),
            Some("Please fill in all fields")
        );
        assert_eq!(form.phase(), Phase::Error);
        assert!(sink.logins.is_empty());
        assert!(nav.paths.is_empty());
    }

    #[test]
    fn test_any_empty_field_blocks_submit() {
        let cases = [
            ("", "a@b.com", "pw"),
            ("Ann", "", "pw"),
            ("Ann", "a@b.com", ""),
            ("   ", "a@b.com", "pw"),
            ("Ann", "\t", "pw"),
            ("Ann", "a@b.com", " \n"),
        ];
        for (name, email, password) in cases {
            let mut form = filled(name, email, password);
            let mut sink = RecordingSink::default();
            let mut nav = RecordingNav::default();

            assert!(form.submit(&mut sink, &mut nav).is_err());
            assert!(form.error().is_some());
            assert!(sink.logins.is_empty(), "sink called for {name:?}/{email:?}");
        }
    }

    #[test]
    fn test_submit_logs_in_without_password() {
        let mut form = filled("Ann", "a@b.com", "pw");
        let mut sink = RecordingSink::default();
        let mut nav = RecordingNav::default();

        assert_eq!(form.submit(&mut sink, &mut nav), Ok(()));

        assert_eq!(sink.logins.len(), 1);
        let user = &sink.logins[0];
        assert_eq!(user.name.as_deref(), Some("Ann"));
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.provider, api::models::LOCAL_PROVIDER);
        assert_eq!(nav.paths, vec![LANDING_ROUTE.to_string()]);
        assert_eq!(form.phase(), Phase::Authenticated);
        assert!(form.error().is_none());
    }

    #[test]
    fn test_sink_failure_is_invalid_credentials() {
        let mut form = filled("Ann", "a@b.com", "pw");
        let mut sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let mut nav = RecordingNav::default();

        assert_eq!(
            form.submit(&mut sink, &mut nav),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(
            form.error().map(|e| e.to_string()).as_deref(),
            Some("Invalid credentials")
        );
        assert!(nav.paths.is_empty());
    }

    #[test]
    fn test_resubmit_after_error_clears_it() {
        let mut form = filled("", "a@b.com", "pw");
        let mut sink = RecordingSink::default();
        let mut nav = RecordingNav::default();
        let _ = form.submit(&mut sink, &mut nav);
        assert_eq!(form.phase(), Phase::Error);

        form.on_field_change("name", "Ann");
        assert_eq!(form.submit(&mut sink, &mut nav), Ok(()));
        assert!(form.error().is_none());
        assert_eq!(sink.logins.len(), 1);
    }

    #[test]
    fn test_mode_toggle_keeps_fields() {
        let mut form = filled("Ann", "a@b.com", "pw");
        assert_eq!(form.mode().title(), "Login");

        form.toggle_mode();
        assert_eq!(form.mode(), LoginMode::Signup);
        assert_eq!(form.mode().title(), "Sign Up");
        assert_eq!(form.form().name, "Ann");
    }

    #[test]
    fn test_submit_trims_name_and_email() {
        let mut form = filled(" Ann ", " a@b.com\t", "pw");
        let mut sink = RecordingSink::default();
        let mut nav = RecordingNav::default();

        assert_eq!(form.submit(&mut sink, &mut nav), Ok(()));
        assert_eq!(sink.logins[0].name.as_deref(), Some("Ann"));
        assert_eq!(sink.logins[0].email, "a@b.com");
        assert_eq!(sink.logins[0].id, "a@b.com");
    }

    #[test]
    fn test_begin_attempt_clears_google_errors() {
        for error in [LoginError::GoogleCallback, LoginError::GoogleInitiation] {
            let mut form = filled("Ann", "a@b.com", "pw");
            form.set_error(error);
            assert_eq!(form.phase(), Phase::Error);

            form.begin_attempt();
            assert!(form.error().is_none());
            assert_eq!(form.phase(), Phase::Validating);
        }
    }

    #[test]
    fn test_begin_attempt_keeps_fields() {
        let mut form = filled("Ann", "a@b.com", "pw");
        form.begin_attempt();
        assert_eq!(form.form().name, "Ann");
        assert_eq!(form.mode(), LoginMode::Login);
    }
}
