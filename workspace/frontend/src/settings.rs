use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::ui::NotificationTimings;

/// Default settings file, looked up in the working directory.
pub const SETTINGS_FILE: &str = "dashboard.toml";

/// Environment variable prefix, e.g. `DASHBOARD_API_BASE_URL`.
pub const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load dashboard settings: {0}")]
    Config(#[from] ConfigError),
}

/// What the goal edit form sends as `progress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalProgressOnEdit {
    /// Always send 0.
    #[default]
    Reset,
    /// Send the progress of the cached goal.
    Preserve,
}

/// Dashboard controller settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Backend origin, e.g. "http://127.0.0.1:5000"; `/api/...` is appended
    pub api_base_url: String,

    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// Delay before a notification switches to its shown state
    pub notification_show_delay_ms: u64,

    /// How long a notification stays shown
    pub notification_duration_ms: u64,

    /// Length of the hide transition before removal
    pub notification_hide_ms: u64,

    /// chrono format string for dates on cards
    pub date_format: String,

    /// Progress sent when a goal is edited
    pub goal_progress_on_edit: GoalProgressOnEdit,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_ms: 10_000,
            notification_show_delay_ms: 100,
            notification_duration_ms: 3_000,
            notification_hide_ms: 300,
            date_format: "%-m/%-d/%Y".to_string(),
            goal_progress_on_edit: GoalProgressOnEdit::Reset,
        }
    }
}

impl AppSettings {
    /// Load settings from `dashboard.toml` (if present) and `DASHBOARD_*`
    /// environment variables, on top of the defaults.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(Some(Path::new(SETTINGS_FILE)))
    }

    /// Same as [`AppSettings::load`] with an explicit optional settings file.
    pub fn load_from(file: Option<&Path>) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("request_timeout_ms", defaults.request_timeout_ms)?
            .set_default("notification_show_delay_ms", defaults.notification_show_delay_ms)?
            .set_default("notification_duration_ms", defaults.notification_duration_ms)?
            .set_default("notification_hide_ms", defaults.notification_hide_ms)?
            .set_default("date_format", defaults.date_format)?
            .set_default("goal_progress_on_edit", "reset")?;

        if let Some(path) = file {
            tracing::debug!("Reading dashboard settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings: AppSettings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        tracing::debug!("Dashboard settings: {:?}", settings);
        Ok(settings)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn notification_timings(&self) -> NotificationTimings {
        NotificationTimings {
            show_delay: Duration::from_millis(self.notification_show_delay_ms),
            display: Duration::from_millis(self.notification_duration_ms),
            hide_transition: Duration::from_millis(self.notification_hide_ms),
        }
    }
}
