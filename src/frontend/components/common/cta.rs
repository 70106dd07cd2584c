//! Call-to-action blocks linking to external forms.

use crate::backend::utils::links::open_link;
use crate::frontend::content::CALLS_TO_ACTION;
use dioxus::prelude::*;

#[component]
pub fn CallsToAction() -> Element {
    rsx! {
        section { class: "cta-blocks",
            for cta in CALLS_TO_ACTION.iter() {
                div { key: "{cta.title}", class: "cta-block",
                    h3 { "{cta.title}" }
                    p { "{cta.body}" }
                    button {
                        class: "button-primary",
                        onclick: move |_| open_link(cta.link),
                        "{cta.button}"
                    }
                }
            }
        }
    }
}
