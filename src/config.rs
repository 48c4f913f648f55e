#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    str::FromStr,
    sync::{Arc, OnceLock},
    time::Duration,
};

use tracing::Level;

use crate::constants::DEFAULT_TICK_MS;

/// How `calc` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Table plus a colored summary line
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{other}`")),
        }
    }
}

/// Settings read from the environment once per process.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Most verbose level the log subscriber lets through
    log_level: Level,
    /// Interval between terminal polls in the form
    tick_rate: Duration,
    /// Output format used by `calc` when `--json` is absent
    format:    OutputFormat,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            format:    OutputFormat::Table,
        }
    }
}

impl ConfigState {
    /// Reads `TRACKGRADES_*` variables, falling back to defaults for anything
    /// unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("TRACKGRADES_LOG")
            .and_then(|value| value.trim().parse::<Level>().ok())
            .unwrap_or(defaults.log_level);

        let tick_rate = lookup("TRACKGRADES_TICK_MS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_rate);

        let format = lookup("TRACKGRADES_FORMAT")
            .and_then(|value| value.parse::<OutputFormat>().ok())
            .unwrap_or(defaults.format);

        Self {
            log_level,
            tick_rate,
            format,
        }
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Returns the form's tick interval.
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Returns the default output format for `calc`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone, Debug)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Arc<ConfigState>> = OnceLock::new();

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> ConfigHandle {
    ConfigHandle(Arc::clone(CONFIG_SLOT.get_or_init(|| Arc::new(ConfigState::from_env()))))
}
