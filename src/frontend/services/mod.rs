//! Hooks that bridge backend state into components.

pub mod context;
