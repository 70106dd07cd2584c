use crate::backend::utils::config::AppConfig;
use crate::backend::utils::route::Route;
use crate::frontend::components::layout::{Footer, Navigation};
use dioxus::prelude::*;
use dioxus_router::components::Outlet;

/// Page shell shared by every routed page: navigation, content, footer.
#[component]
pub fn Shell() -> Element {
    let animated = AppConfig::global().ui.animations_enabled;

    rsx! {
        div { class: "shell",
            Navigation {}
            main {
                class: if animated { "page fade-in" } else { "page" },
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
