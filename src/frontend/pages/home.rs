//! Marketing landing page.

use crate::backend::utils::config::AppConfig;
use crate::frontend::components::common::{Achievements, CallsToAction, Hero};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let site = &AppConfig::global().site;

    rsx! {
        Hero { name: site.name.clone(), tagline: site.tagline.clone() }
        h2 { "Results families can see" }
        Achievements {}
        h2 { "Getting started" }
        CallsToAction {}
    }
}
