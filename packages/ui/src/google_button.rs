use dioxus::prelude::*;

use crate::icons::FaGoogle;
use crate::Icon;

/// "Sign in with Google" button. The caller owns what a click does.
#[component]
pub fn GoogleSignInButton(
    onclick: EventHandler<MouseEvent>,
    #[props(default = false)] disabled: bool,
    #[props(default = "Sign in with Google".to_string())] label: String,
) -> Element {
    rsx! {
        button {
            class: "login-btn google-btn",
            r#type: "button",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            Icon { icon: FaGoogle, width: 18, height: 18 }
            span { "{label}" }
        }
    }
}
