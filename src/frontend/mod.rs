//! Frontend of the tutoring portal.

pub mod components;
pub mod content;
pub mod pages;
pub mod services;
