use crate::backend::auth::SessionProvider;
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::route::{HOME_PATH, Route, SIGN_IN_PATH, landing_path};
use crate::frontend::services::context::use_session;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

#[component]
pub fn Navigation() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();
    let session = use_session();
    let provider = use_context::<SessionProvider>();
    let brand = AppConfig::global().site.name.as_str();

    let item_class = |active: bool| if active { "nav-item active" } else { "nav-item" };
    let home_class = item_class(matches!(route, Route::Home {}));
    let sign_in_class = item_class(matches!(route, Route::SignIn {}));
    let dashboard_class = item_class(matches!(
        route,
        Route::Dashboard {} | Route::ParentDashboard {}
    ));

    let user = session.read().current_user().cloned();
    let account_items = match user {
        Some(user) => {
            let landing = landing_path(user.role);
            let name = user.display_name;
            rsx! {
                li {
                    class: dashboard_class,
                    onclick: move |_| {
                        nav.push(landing);
                    },
                    "Dashboard"
                }
                li { class: "nav-user", "{name}" }
                li {
                    button {
                        class: "button-ghost",
                        onclick: move |_| provider.sign_out(),
                        "Sign out"
                    }
                }
            }
        }
        None => rsx! {
            li {
                class: sign_in_class,
                onclick: move |_| {
                    nav.push(SIGN_IN_PATH);
                },
                "Sign in"
            }
        },
    };

    rsx! {
        nav { class: "navigation",
            span {
                class: "brand",
                onclick: move |_| {
                    nav.push(HOME_PATH);
                },
                "{brand}"
            }
            ul { class: "nav-items",
                li {
                    class: home_class,
                    onclick: move |_| {
                        nav.push(HOME_PATH);
                    },
                    "Home"
                }
                {account_items}
            }
        }
    }
}
