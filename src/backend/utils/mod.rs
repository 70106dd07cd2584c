//! Routing, configuration and resource helpers.

pub mod config;
pub mod css;
pub mod links;
pub mod route;
