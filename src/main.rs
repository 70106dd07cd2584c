mod backend;
mod frontend;
mod utils;

use crate::backend::auth::SessionProvider;
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::css::ResourceLoader;
use crate::backend::utils::route::Route;
use anyhow::Context;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;

fn main() -> anyhow::Result<()> {
    utils::logging::init();

    let config = AppConfig::load()
        .with_context(|| {
            format!(
                "Failed to load config from {}",
                AppConfig::get_config_path().display()
            )
        })?
        .install();

    log::info!("Starting {}", config.site.name);

    let size = LogicalSize::new(config.ui.window_width, config.ui.window_height);
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(&config.site.name)
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(800.0, 600.0)),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(desktop).launch(App);
    Ok(())
}

#[component]
fn App() -> Element {
    let provider = use_context_provider(SessionProvider::new);

    // Resolve the session after the first render so guards start out loading
    use_future(move || {
        let provider = provider.clone();
        async move {
            provider.resolve(AppConfig::global().remembered());
        }
    });

    rsx! {
        style { dangerous_inner_html: ResourceLoader::get_combined_css() }
        Router::<Route> {}
    }
}
