use crate::backend::utils::route::HOME_PATH;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    let path = segments.join("/");

    rsx! {
        div { class: "sign-in",
            h1 { "Page not found" }
            p { class: "hint", "Nothing lives at /{path}." }
            button {
                class: "button-primary",
                onclick: move |_| {
                    nav.replace(HOME_PATH);
                },
                "Back to the home page"
            }
        }
    }
}
