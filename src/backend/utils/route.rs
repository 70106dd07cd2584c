use crate::backend::auth::session::Role;
use crate::frontend::components::layout::Shell;
use crate::frontend::pages::{Dashboard, Home, NotFound, ParentDashboard, SignIn};

use dioxus::prelude::*;
use dioxus_router::Routable;

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/sign-in";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PARENT_DASHBOARD_PATH: &str = "/parent-dashboard";

/// Main routing enum for the portal.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    /// Marketing landing page.
    #[route("/")]
    Home {},
    #[route("/sign-in")]
    SignIn {},
    /// Student area.
    #[route("/dashboard")]
    Dashboard {},
    /// Parent area.
    #[route("/parent-dashboard")]
    ParentDashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Where a user lands after signing in.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Student => DASHBOARD_PATH,
        Role::Parent => PARENT_DASHBOARD_PATH,
    }
}
