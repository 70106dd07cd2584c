use dioxus::prelude::*;

#[component]
pub fn Loading(message: &'static str) -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
            p { "{message}" }
        }
    }
}
