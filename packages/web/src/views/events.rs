//! Landing page shown after sign-in.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

/// Events page component.
#[component]
pub fn Events() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Signed-out visitors belong on the login page
    use_effect(move || {
        let current = auth();
        if !current.loading && current.user.is_none() {
            nav.replace(Route::Login {
                code: String::new(),
                state: String::new(),
            });
        }
    });

    let current = auth();
    if current.loading {
        return rsx! {
            p { class: "events-loading", "Loading..." }
        };
    }
    let Some(user) = current.user else {
        return rsx! {};
    };
    let name = user.display_name().to_string();

    rsx! {
        div {
            class: "events-page",

            header {
                class: "events-header",
                h1 { "Events" }
                span { class: "events-user", "Signed in as {name}" }
                LogoutButton { class: "logout-btn" }
            }

            p { "Welcome, {name}." }
        }
    }
}
