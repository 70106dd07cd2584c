//! Portal configuration.

use crate::backend::auth::directory::{Account, AccountDirectory};
use crate::backend::auth::session::{Role, UserRef};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "PORTAL_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "portal.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub links: LinksConfig,
    pub ui: UiConfig,
    pub accounts: AccountDirectory,
    /// Username to sign in automatically at startup.
    pub remembered_user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub enrollment_form: String,
    pub contact_form: String,
    pub schedule: String,
    pub homework: String,
    pub progress_reports: String,
    pub billing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_width: f64,
    pub window_height: f64,
    pub animations_enabled: bool,
    /// Lists the account directory on the sign-in page. Only for demo builds.
    pub show_demo_accounts: bool,
}

/// External destinations referenced by static content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKey {
    Enrollment,
    Contact,
    Schedule,
    Homework,
    ProgressReports,
    Billing,
}

impl LinksConfig {
    pub fn url(&self, key: LinkKey) -> &str {
        match key {
            LinkKey::Enrollment => &self.enrollment_form,
            LinkKey::Contact => &self.contact_form,
            LinkKey::Schedule => &self.schedule,
            LinkKey::Homework => &self.homework,
            LinkKey::ProgressReports => &self.progress_reports,
            LinkKey::Billing => &self.billing,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            links: LinksConfig::default(),
            ui: UiConfig::default(),
            accounts: AccountDirectory::new(vec![
                Account {
                    username: "student".to_string(),
                    display_name: "Demo Student".to_string(),
                    role: Role::Student,
                },
                Account {
                    username: "parent".to_string(),
                    display_name: "Demo Parent".to_string(),
                    role: Role::Parent,
                },
            ]),
            remembered_user: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Bright Path Tutoring".to_string(),
            tagline: "One-to-one tutoring that turns effort into results".to_string(),
            contact_email: "hello@brightpath.example".to_string(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            enrollment_form: "https://forms.brightpath.example/enroll".to_string(),
            contact_form: "https://forms.brightpath.example/contact".to_string(),
            schedule: "https://calendar.brightpath.example".to_string(),
            homework: "https://classroom.brightpath.example/homework".to_string(),
            progress_reports: "https://classroom.brightpath.example/reports".to_string(),
            billing: "https://billing.brightpath.example".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 832.0,
            animations_enabled: true,
            show_demo_accounts: false,
        }
    }
}

impl AppConfig {
    /// Gets the config path from the environment or the working directory.
    pub fn get_config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path())
    }

    /// Loads the config from `path`, using defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config: Self = serde_json::from_str(&json)?;
        log::info!(
            "Loaded config from {} ({} accounts)",
            path.display(),
            config.accounts.len()
        );
        Ok(config)
    }

    /// The user restored at startup, if one is configured and known.
    pub fn remembered(&self) -> Option<UserRef> {
        let username = self.remembered_user.as_deref()?;
        let account = self.accounts.find(username);
        if account.is_none() {
            log::warn!("Remembered user '{username}' is not in the account directory");
        }
        account.map(Account::to_user)
    }

    /// Installs the process-wide config. Later calls are ignored.
    pub fn install(self) -> &'static Self {
        if CONFIG.set(self).is_err() {
            log::warn!("Config already installed, keeping the first one");
        }
        Self::global()
    }

    pub fn global() -> &'static Self {
        CONFIG.get_or_init(Self::default)
    }
}
