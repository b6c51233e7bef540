//! Login page: name/email/password form plus Google sign-in.
//!
//! Google redirects back to this page with `code` and `state` in the query
//! string; the page exchanges the code once and moves on to the landing route.

use dioxus::prelude::*;
use ui::icons::FaRightToBracket;
use ui::{
    begin_google_sign_in, finish_google_sign_in, use_auth, use_auth_session, Completion,
    GoogleSignInButton, Icon, LoginForm, MountToken, Phase, RedirectGuard, RedirectParams,
    ServerAuthClient, TimedClient,
};

use crate::Route;

/// Login page component.
#[component]
pub fn Login(code: String, state: String) -> Element {
    let auth = use_auth();
    let mut session = use_auth_session();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::new);
    let mut guard = use_signal(RedirectGuard::default);
    let mut busy = use_signal(|| false);

    let mount = use_hook(MountToken::new);
    use_drop({
        let mount = mount.clone();
        move || mount.unmount()
    });

    // If already logged in, go to the landing route
    use_effect(move || {
        let current = auth();
        if !current.loading && current.user.is_some() && form.peek().phase() != Phase::Authenticated {
            nav.replace(Route::Events {});
        }
    });

    // Complete a Google redirect, at most once per code
    let redirect_mount = mount.clone();
    use_effect(use_reactive!(|(code, state)| {
        let params = RedirectParams::from_query(&code, &state);
        let Some(claim) = params.claim(&mut guard.write()) else {
            return;
        };

        form.write().begin_attempt();
        busy.set(true);

        let mount = redirect_mount.clone();
        spawn(async move {
            let client = TimedClient::new(ServerAuthClient);
            let mut nav = nav;
            match finish_google_sign_in(claim, &client, &mut session, &mut nav, &mount).await {
                Completion::Done => form.write().mark_authenticated(),
                Completion::Failed(e) => {
                    form.write().set_error(e);
                    busy.set(false);
                }
                Completion::Discarded => {}
            }
        });
    }));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut nav = nav;
        if let Err(e) = form.write().submit(&mut session, &mut nav) {
            tracing::debug!("Login form rejected: {}", e);
        }
    };

    let google_mount = mount.clone();
    let handle_google = move |_: MouseEvent| {
        form.write().begin_attempt();
        busy.set(true);

        let mount = google_mount.clone();
        spawn(async move {
            let client = TimedClient::new(ServerAuthClient);
            match begin_google_sign_in(&client, &mount).await {
                // The browser is on its way to Google
                Completion::Done => {}
                Completion::Failed(e) => {
                    form.write().set_error(e);
                    busy.set(false);
                }
                Completion::Discarded => {}
            }
        });
    };

    let snapshot = form.read().clone();
    let fields = snapshot.form().clone();
    let mode = snapshot.mode();
    let title = mode.title();
    let (toggle_text, toggle_link) = mode.toggle_prompt();

    rsx! {
        div {
            class: "login-container",

            div {
                class: "login-card",

                h1 {
                    id: "login-heading",
                    class: "login-title",
                    "{title}"
                }

                if let Some(err) = snapshot.error() {
                    div {
                        class: "login-error",
                        role: "alert",
                        aria_live: "assertive",
                        "{err}"
                    }
                }

                form {
                    class: "login-form",
                    aria_labelledby: "login-heading",
                    onsubmit: handle_submit,

                    div {
                        label { r#for: "name", "Name" }
                        input {
                            id: "name",
                            name: "name",
                            r#type: "text",
                            placeholder: "Enter your name",
                            value: fields.name,
                            oninput: move |evt: FormEvent| form.write().on_field_change("name", evt.value()),
                        }
                        small { "Your full name." }
                    }

                    div {
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            name: "email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: fields.email,
                            oninput: move |evt: FormEvent| form.write().on_field_change("email", evt.value()),
                        }
                        small { "Your email address for login." }
                    }

                    div {
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            name: "password",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: fields.password,
                            oninput: move |evt: FormEvent| form.write().on_field_change("password", evt.value()),
                        }
                        small { "Your account password." }
                    }

                    button {
                        class: "login-btn submit-btn",
                        r#type: "submit",
                        disabled: busy(),
                        Icon { icon: FaRightToBracket, width: 18, height: 18 }
                        span { "{title}" }
                    }
                }

                div {
                    class: "login-divider",
                    span { "or" }
                }

                GoogleSignInButton {
                    disabled: busy(),
                    onclick: handle_google,
                }

                p {
                    class: "login-toggle",
                    "{toggle_text}"
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            form.write().toggle_mode();
                        },
                        "{toggle_link}"
                    }
                }
            }
        }

        style {
            r#"
            .login-container {{
                display: flex;
                align-items: center;
                justify-content: center;
                min-height: 100vh;
                padding: 2rem;
            }}

            .login-card {{
                width: 100%;
                max-width: 400px;
                padding: 2.5rem;
                border: 1px solid rgba(6, 182, 212, 0.3);
                border-radius: 12px;
            }}

            .login-title {{
                text-align: center;
                color: #06b6d4;
                font-weight: 700;
                font-size: 2.25rem;
                margin-bottom: 2rem;
            }}

            .login-error {{
                margin-bottom: 1rem;
                padding: 0.75rem;
                border: 1px solid rgba(239, 68, 68, 0.5);
                border-radius: 8px;
                color: #f87171;
                text-align: center;
            }}

            .login-form {{
                display: flex;
                flex-direction: column;
                gap: 1.25rem;
            }}

            .login-form input {{
                width: 100%;
                padding: 0.75rem;
                box-sizing: border-box;
            }}

            .login-btn {{
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                width: 100%;
                padding: 0.625rem 1.25rem;
                border: none;
                border-radius: 4px;
                font-size: 1rem;
                cursor: pointer;
            }}

            .login-btn:disabled {{
                opacity: 0.5;
                cursor: not-allowed;
            }}

            .submit-btn {{
                background-color: #06b6d4;
                color: white;
            }}

            .google-btn {{
                background-color: #4285f4;
                color: white;
            }}

            .login-divider {{
                text-align: center;
                margin: 1.5rem 0;
                color: #9ca3af;
            }}

            .login-toggle {{
                margin-top: 1.5rem;
                text-align: center;
                font-size: 0.875rem;
            }}
            "#
        }
    }
}
