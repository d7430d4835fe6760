use crate::model::{EnvironmentUpdate, WeatherCondition};
use device_actor::{Recipient, Reply};

#[derive(Debug)]
pub enum EnvironmentMessage {
    /// Registers a listener for every published update.
    Subscribe(Recipient<EnvironmentUpdate>),
    Start,
    Stop,
    Tick,
    SetTemperature(f64),
    SetWeather(WeatherCondition),
    GetSnapshot {
        reply: Reply<EnvironmentSnapshot>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentSnapshot {
    pub running: bool,
    pub temperature: f64,
    pub weather: WeatherCondition,
}
