//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` and from `DAYLIMIT_*` environment variables,
//! e.g. `DAYLIMIT_LIMITS__CASH=1500`.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub cash: f64,
    pub calories: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            cash: 1000.0,
            calories: 2000.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Cash {
    /// Lowercase currency code, validated when the report is rendered.
    pub currency: String,
}

impl Default for Cash {
    fn default() -> Self {
        Self {
            currency: "rub".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub limits: Limits,
    pub cash: Cash,
}

impl Settings {
    pub fn new(path: Option<&str>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path.unwrap_or(DEFAULT_CONFIG_PATH)).required(false))
            .add_source(
                Environment::with_prefix("DAYLIMIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
