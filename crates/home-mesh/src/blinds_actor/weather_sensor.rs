//! Weather sensor feeding the blinds.

use crate::model::{SensorMode, SensorStatus, WeatherCondition};
use async_trait::async_trait;
use device_actor::{Device, Recipient, Reply, Scope};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::{debug, info, warn};

const TICK_TIMER: &str = "weather-tick";

#[derive(Debug)]
pub enum WeatherSensorMessage {
    SwitchMode(SensorMode),
    Tick,
    /// Manual input, forwarded only in manual mode.
    ReadWeather(WeatherCondition),
    /// Environment feed value, forwarded only in simulated mode.
    EnvironmentUpdate(WeatherCondition),
    GetStatus {
        reply: Reply<SensorStatus<WeatherCondition>>,
    },
}

/// Same manual/simulated duality as the temperature sensor, for weather.
///
/// Simulated mode draws a random condition on every tick and also passes
/// environment updates through. The context is where conditions go.
pub struct WeatherSensor {
    mode: SensorMode,
    last_condition: WeatherCondition,
    interval: Duration,
    rng: StdRng,
}

impl WeatherSensor {
    /// Starts in manual mode, last condition cloudy.
    pub fn new(interval: Duration, rng: StdRng) -> Self {
        Self {
            mode: SensorMode::Manual,
            last_condition: WeatherCondition::Cloudy,
            interval,
            rng,
        }
    }

    fn forward(&mut self, condition: WeatherCondition, blinds: &Recipient<WeatherCondition>) {
        self.last_condition = condition;
        if blinds.tell(condition).is_err() {
            warn!(%condition, "Weather listener unreachable");
        }
    }
}

#[async_trait]
impl Device for WeatherSensor {
    type Message = WeatherSensorMessage;
    type Context = Recipient<WeatherCondition>;

    async fn handle(
        &mut self,
        message: WeatherSensorMessage,
        scope: &mut Scope<Self>,
        blinds: &Recipient<WeatherCondition>,
    ) {
        match message {
            WeatherSensorMessage::SwitchMode(mode) => {
                self.mode = mode;
                match mode {
                    SensorMode::Simulated => {
                        scope
                            .timers()
                            .start_periodic(TICK_TIMER, self.interval, || WeatherSensorMessage::Tick)
                    }
                    SensorMode::Manual => {
                        scope.timers().cancel(TICK_TIMER);
                    }
                }
                info!(%mode, "Weather sensor mode switched");
            }
            WeatherSensorMessage::Tick => {
                if self.mode == SensorMode::Simulated {
                    let condition = *WeatherCondition::ALL
                        .choose(&mut self.rng)
                        .unwrap_or(&self.last_condition);
                    debug!(%condition, "Simulated weather");
                    self.forward(condition, blinds);
                }
            }
            WeatherSensorMessage::ReadWeather(condition) => {
                if self.mode == SensorMode::Manual {
                    info!(%condition, "Manual weather input");
                    self.forward(condition, blinds);
                } else {
                    debug!(%condition, "Ignoring manual weather in simulated mode");
                }
            }
            WeatherSensorMessage::EnvironmentUpdate(condition) => {
                if self.mode == SensorMode::Simulated {
                    debug!(%condition, "Environment weather update");
                    self.forward(condition, blinds);
                }
            }
            WeatherSensorMessage::GetStatus { reply } => {
                let _ = reply.send(SensorStatus {
                    mode: self.mode,
                    last_reading: Some(self.last_condition),
                });
            }
        }
    }
}
