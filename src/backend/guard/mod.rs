//! Role-based route guarding.
//!
//! [`decide`] is the pure decision, [`RedirectDispatcher`] turns decisions into
//! at-most-once redirects, and [`SessionGuard`] re-runs both on every session
//! change.

pub mod decision;
pub mod dispatcher;
pub mod watcher;

pub use decision::{Decision, RoleRequirement, decide};
pub use dispatcher::{Navigate, RedirectDispatcher};
pub use watcher::SessionGuard;
