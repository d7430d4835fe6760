//! Environment readings shared by sensors, the simulator and the supervisor.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [Self::Sunny, Self::Cloudy, Self::Rainy, Self::Snowy];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "SUNNY",
            Self::Cloudy => "CLOUDY",
            Self::Rainy => "RAINY",
            Self::Snowy => "SNOWY",
        }
    }
}

impl Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = UnknownVariant;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "weather condition",
                value: s.to_string(),
            })
    }
}

/// Where a sensor takes its readings from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorMode {
    /// Periodic self-generated readings plus environment updates.
    Simulated,
    /// Only explicitly supplied readings.
    Manual,
}

impl Display for SensorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simulated => f.write_str("SIMULATED"),
            Self::Manual => f.write_str("MANUAL"),
        }
    }
}

/// Snapshot of a sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorStatus<R> {
    pub mode: SensorMode,
    pub last_reading: Option<R>,
}

/// Which feed drives the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvironmentSource {
    /// The built-in environment simulator.
    Internal,
    /// The external publish/subscribe feed.
    External,
    /// Values supplied by hand.
    Manual,
}

impl EnvironmentSource {
    /// Sensor mode implied by this source.
    pub fn sensor_mode(self) -> SensorMode {
        match self {
            Self::Manual => SensorMode::Manual,
            Self::Internal | Self::External => SensorMode::Simulated,
        }
    }
}

impl Display for EnvironmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Internal => f.write_str("INTERNAL"),
            Self::External => f.write_str("EXTERNAL"),
            Self::Manual => f.write_str("MANUAL"),
        }
    }
}

impl FromStr for EnvironmentSource {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INTERNAL" => Ok(Self::Internal),
            "EXTERNAL" => Ok(Self::External),
            "MANUAL" => Ok(Self::Manual),
            _ => Err(UnknownVariant {
                kind: "environment source",
                value: s.to_string(),
            }),
        }
    }
}

/// One published environment value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvironmentUpdate {
    /// Degrees Celsius.
    Temperature(f64),
    Weather(WeatherCondition),
}
