use crate::frontend::content::ACHIEVEMENTS;
use dioxus::prelude::*;

#[component]
pub fn Achievements() -> Element {
    rsx! {
        section { class: "achievements",
            for achievement in ACHIEVEMENTS.iter() {
                div { key: "{achievement.label}", class: "achievement",
                    div { class: "achievement-value", "{achievement.value}" }
                    div { class: "achievement-label", "{achievement.label}" }
                }
            }
        }
    }
}
