//! External link handling.

use crate::backend::utils::config::{AppConfig, LinkKey};

/// Opens a configured external link in the system browser.
///
/// Failures are logged and otherwise ignored.
pub fn open_link(key: LinkKey) {
    let url = AppConfig::global().links.url(key);
    if url.is_empty() {
        log::warn!("No URL configured for {key:?}");
        return;
    }

    log::info!("Opening {key:?} link: {url}");
    if let Err(e) = webbrowser::open(url) {
        log::error!("Failed to open {url}: {e}");
    }
}

/// Opens the default mail client addressed to the configured contact email.
pub fn open_mail() {
    let email = &AppConfig::global().site.contact_email;
    if let Err(e) = webbrowser::open(&format!("mailto:{email}")) {
        log::error!("Failed to open mail client: {e}");
    }
}
