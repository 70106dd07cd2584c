//! Logger setup.

use env_logger::Env;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,dioxus=warn,dioxus_desktop=warn";

pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .init();
}
