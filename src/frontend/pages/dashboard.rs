//! Role-gated dashboards.

use crate::backend::auth::{Role, SessionProvider};
use crate::backend::guard::RoleRequirement;
use crate::backend::utils::links::open_link;
use crate::frontend::components::guard::RouteGuard;
use crate::frontend::content::resources_for;
use crate::frontend::services::context::use_session;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RouteGuard { required: RoleRequirement::Role(Role::Student),
            DashboardView { role: Role::Student }
        }
    }
}

#[component]
pub fn ParentDashboard() -> Element {
    rsx! {
        RouteGuard { required: RoleRequirement::Role(Role::Parent),
            DashboardView { role: Role::Parent }
        }
    }
}

#[component]
fn DashboardView(role: Role) -> Element {
    let session = use_session();
    let provider = use_context::<SessionProvider>();

    let name = session
        .read()
        .current_user()
        .map(|user| user.display_name.clone())
        .unwrap_or_default();

    let (title, intro) = match role {
        Role::Student => (
            "Your learning hub",
            "Everything you need between sessions, in one place.",
        ),
        Role::Parent => (
            "Family overview",
            "Keep track of sessions, progress and billing.",
        ),
    };

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-header",
                div {
                    h1 { "{title}" }
                    p { "Welcome back, {name}." }
                }
                button {
                    class: "button-ghost",
                    onclick: move |_| provider.sign_out(),
                    "Sign out"
                }
            }
            p { class: "hint", "{intro}" }
            div { class: "resources",
                for resource in resources_for(role).iter() {
                    div {
                        key: "{resource.title}",
                        class: "resource",
                        onclick: move |_| open_link(resource.link),
                        h3 { "{resource.title}" }
                        p { "{resource.description}" }
                    }
                }
            }
        }
    }
}
