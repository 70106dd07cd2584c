//! Routed pages.

pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod sign_in;

pub use dashboard::{Dashboard, ParentDashboard};
pub use home::Home;
pub use not_found::NotFound;
pub use sign_in::SignIn;
