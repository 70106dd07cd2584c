//! Common components.

pub mod achievements;
pub mod cta;
pub mod hero;
pub mod loading;

pub use achievements::Achievements;
pub use cta::CallsToAction;
pub use hero::Hero;
pub use loading::Loading;
