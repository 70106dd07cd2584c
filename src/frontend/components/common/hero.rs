//! Landing hero section.

use crate::backend::utils::config::LinkKey;
use crate::backend::utils::links::open_link;
use crate::backend::utils::route::SIGN_IN_PATH;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn Hero(name: String, tagline: String) -> Element {
    let nav = navigator();

    rsx! {
        section { class: "hero",
            h1 { "{name}" }
            p { "{tagline}" }
            div { class: "hero-actions",
                button {
                    class: "button-primary",
                    onclick: move |_| open_link(LinkKey::Enrollment),
                    "Book a free assessment"
                }
                button {
                    class: "button-ghost",
                    onclick: move |_| {
                        nav.push(SIGN_IN_PATH);
                    },
                    "Student & parent sign in"
                }
            }
        }
    }
}
