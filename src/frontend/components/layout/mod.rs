//! Layout components.

pub mod footer;
pub mod navigation;
pub mod shell;

pub use footer::Footer;
pub use navigation::Navigation;
pub use shell::Shell;
