use crate::backend::utils::config::AppConfig;
use crate::backend::utils::links::open_mail;
use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let site = &AppConfig::global().site;
    let year = chrono::Local::now().year();
    let name = site.name.as_str();
    let email = site.contact_email.as_str();

    rsx! {
        footer { class: "footer",
            span { "© {year} {name}" }
            span {
                class: "nav-item",
                onclick: move |_| open_mail(),
                "{email}"
            }
        }
    }
}
