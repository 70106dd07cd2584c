//! Role-gated wrapper for protected pages.

use crate::backend::auth::SessionProvider;
use crate::backend::guard::{Decision, Navigate, RoleRequirement, SessionGuard, decide};
use crate::frontend::components::common::Loading;
use dioxus::prelude::*;
use dioxus_router::{Navigator, navigator};
use std::rc::Rc;

/// Router-backed navigation. Uses `replace` so the guarded page does not stay in history.
struct RouterNavigation(Navigator);

impl Navigate for RouterNavigation {
    fn go_to(&self, path: &str) {
        self.0.replace(path.to_string());
    }
}

/// Navigation used by guards. Falls back to the router when no ancestor provides one.
#[derive(Clone)]
pub struct GuardNavigation(pub Rc<dyn Navigate>);

impl GuardNavigation {
    fn router() -> Self {
        Self(Rc::new(RouterNavigation(navigator())))
    }
}

impl Navigate for GuardNavigation {
    fn go_to(&self, path: &str) {
        self.0.go_to(path);
    }
}

/// Renders `children` only while the session satisfies `required`.
///
/// Shows a placeholder until the session has loaded and silently redirects to
/// the sign-in page otherwise. The decision is re-run on every session change.
#[component]
pub fn RouteGuard(required: RoleRequirement, children: Element) -> Element {
    let provider = use_context::<SessionProvider>();
    let navigation =
        use_hook(|| try_consume_context::<GuardNavigation>().unwrap_or_else(GuardNavigation::router));
    let decision = use_signal(|| decide(&provider.snapshot(), required));

    use_future(move || {
        let rx = provider.subscribe();
        let navigation = navigation.clone();
        async move {
            let mut decision = decision;
            SessionGuard::new(required)
                .watch(rx, navigation, move |next| decision.set(next))
                .await;
        }
    });

    match decision() {
        Decision::Loading => rsx! {
            Loading { message: "Checking your session..." }
        },
        Decision::Redirect(_) => rsx! {},
        Decision::Allow => rsx! { {children} },
    }
}
