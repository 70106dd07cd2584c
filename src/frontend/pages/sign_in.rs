//! Sign-in page.

use crate::backend::auth::SessionProvider;
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::route::landing_path;
use crate::frontend::services::context::use_session;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::navigator;

/// Usernames to advertise on the sign-in page, when the config opts in.
fn demo_accounts_hint(config: &AppConfig) -> Option<String> {
    if !config.ui.show_demo_accounts || config.accounts.is_empty() {
        return None;
    }
    Some(config.accounts.usernames().collect::<Vec<_>>().join(", "))
}

#[component]
pub fn SignIn() -> Element {
    let nav = navigator();
    let provider = use_context::<SessionProvider>();
    let session = use_session();
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let hint = demo_accounts_hint(AppConfig::global());

    // Signed-in visitors, including ones who just signed in here, go to their dashboard
    use_effect(move || {
        if let Some(user) = session.read().current_user() {
            nav.replace(landing_path(user.role));
        }
    });

    let submit = use_callback(move |_: ()| {
        let name = username.read().trim().to_string();
        match provider.sign_in(&name, &AppConfig::global().accounts) {
            Ok(_) => error.set(None),
            Err(e) => error.set(Some(e.message().to_string())),
        }
    });

    let on_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            submit.call(());
        }
    };

    rsx! {
        div { class: "sign-in",
            h1 { "Sign in" }
            p { class: "hint", "Students and parents use the username from their welcome email." }
            input {
                r#type: "text",
                value: "{username()}",
                maxlength: "32",
                placeholder: "Username",
                autofocus: true,
                oninput: move |e| {
                    username.set(e.value());
                    error.set(None);
                },
                onkeydown: on_keydown,
            }
            div { class: "error-message",
                if let Some(message) = error() {
                    "{message}"
                }
            }
            button {
                class: "button-primary",
                onclick: move |_| submit.call(()),
                "Continue"
            }
            if let Some(hint) = hint {
                p { class: "hint", "Demo accounts: {hint}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_accounts_are_not_listed_by_default() {
        let config = AppConfig::default();
        assert!(!config.accounts.is_empty());
        assert_eq!(demo_accounts_hint(&config), None);
    }

    #[test]
    fn demo_builds_list_usernames() {
        let mut config = AppConfig::default();
        config.ui.show_demo_accounts = true;
        assert_eq!(
            demo_accounts_hint(&config).as_deref(),
            Some("student, parent")
        );

        config.accounts = Default::default();
        assert_eq!(demo_accounts_hint(&config), None);
    }
}
