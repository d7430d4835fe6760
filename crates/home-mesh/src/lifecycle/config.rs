//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `home-mesh.toml` in the working directory, or at the path in
//! `HOME_MESH_CONFIG`. Every field has a default so the file is optional.
//! Environment variables take precedence over file values.

use crate::fridge_actor::FridgeConfig;
use crate::model::Price;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_PATH: &str = "home-mesh.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub timeouts: TimeoutsConfig,
    pub fridge: FridgeSettings,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

/// Periods of the simulated devices.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Tick period of the temperature and weather sensors in simulated mode.
    pub sensor_interval_ms: u64,
    /// Tick period of the environment simulator.
    pub environment_interval_ms: u64,
    /// How long a movie plays before it ends by itself.
    pub movie_duration_ms: u64,
}

/// Request timeouts of the command surface.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeoutsConfig {
    /// Status queries and other quick requests.
    pub status_ms: u64,
    /// Commands that wait for the device's verdict (play, consume, ...).
    pub command_ms: u64,
    /// Orders, which wait for the order backend.
    pub order_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FridgeSettings {
    pub max_weight_kg: f64,
    pub max_items: u32,
    pub reorder_threshold: u32,
    pub reorder_quantity: u32,
    /// Start with the default kitchen stock instead of an empty fridge.
    pub stock_defaults: bool,
}

/// Settings for the in-process order processor.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Flat fee added to every order, as a decimal string.
    pub processing_fee: String,
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the config file (if present), then apply
    /// environment-variable overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed, or if a value is
    /// out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("HOME_MESH_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOME_MESH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let timing = &self.timing;
        let timeouts = &self.timeouts;
        let periods = [
            ("timing.sensor_interval_ms", timing.sensor_interval_ms),
            ("timing.environment_interval_ms", timing.environment_interval_ms),
            ("timing.movie_duration_ms", timing.movie_duration_ms),
            ("timeouts.status_ms", timeouts.status_ms),
            ("timeouts.command_ms", timeouts.command_ms),
            ("timeouts.order_ms", timeouts.order_ms),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::Validation(format!("{name} must be non-zero")));
        }
        if !(self.fridge.max_weight_kg > 0.0) {
            return Err(ConfigError::Validation(
                "fridge.max_weight_kg must be positive".to_string(),
            ));
        }
        if self.fridge.max_items == 0 {
            return Err(ConfigError::Validation(
                "fridge.max_items must be non-zero".to_string(),
            ));
        }
        self.processing_fee()?;
        Ok(())
    }

    pub fn sensor_interval(&self) -> Duration {
        Duration::from_millis(self.timing.sensor_interval_ms)
    }

    pub fn environment_interval(&self) -> Duration {
        Duration::from_millis(self.timing.environment_interval_ms)
    }

    pub fn movie_duration(&self) -> Duration {
        Duration::from_millis(self.timing.movie_duration_ms)
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.status_ms)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.command_ms)
    }

    pub fn order_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.order_ms)
    }

    pub fn backend_latency(&self) -> Duration {
        Duration::from_millis(self.backend.latency_ms)
    }

    /// # Errors
    ///
    /// Returns a validation error if the fee is not a decimal amount.
    pub fn processing_fee(&self) -> Result<Price, ConfigError> {
        self.backend
            .processing_fee
            .parse::<Price>()
            .map_err(|e| ConfigError::Validation(format!("backend.processing_fee: {e}")))
    }

    #[must_use]
    pub fn fridge_config(&self) -> FridgeConfig {
        FridgeConfig {
            max_weight_kg: self.fridge.max_weight_kg,
            max_items: self.fridge.max_items,
            reorder_threshold: self.fridge.reorder_threshold,
            reorder_quantity: self.fridge.reorder_quantity,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            sensor_interval_ms: 5_000,
            environment_interval_ms: 10_000,
            movie_duration_ms: 120_000,
        }
    }
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            status_ms: 2_000,
            command_ms: 5_000,
            order_ms: 10_000,
        }
    }
}

impl Default for FridgeSettings {
    fn default() -> Self {
        let fridge = FridgeConfig::default();
        Self {
            max_weight_kg: fridge.max_weight_kg,
            max_items: fridge.max_items,
            reorder_threshold: fridge.reorder_threshold,
            reorder_quantity: fridge.reorder_quantity,
            stock_defaults: true,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            processing_fee: "1.99".to_string(),
            latency_ms: 50,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "home_mesh=info,device_actor=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
