//! UI components and layouts. `guard` holds the role-gated wrapper used by
//! protected pages.

pub mod common;
pub mod guard;
pub mod layout;
