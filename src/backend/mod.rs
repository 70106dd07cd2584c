//! Non-UI logic: session state, route guarding and configuration.

pub mod auth;
pub mod guard;
pub mod utils;
