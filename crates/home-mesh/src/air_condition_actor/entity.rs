use crate::air_condition_actor::actions::{AirConditionMessage, AirConditionStatus};
use crate::air_condition_actor::sensor::{TemperatureSensor, TemperatureSensorMessage};
use crate::model::SensorMode;
use async_trait::async_trait;
use device_actor::{Device, DeviceActor, DeviceRef, Scope};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Readings strictly above this switch the unit on; at or below, off.
pub const POWER_THRESHOLD: f64 = 25.0;

struct OwnedSensor {
    address: DeviceRef<TemperatureSensor>,
    handle: JoinHandle<()>,
}

/// Air conditioning unit with its own temperature sensor.
///
/// The sensor is spawned in `on_start` and reports back through a
/// [`Recipient`](device_actor::Recipient) pointing at this device. Because of
/// that cycle the unit only ends on an explicit stop, which also stops the
/// sensor.
pub struct AirCondition {
    on: bool,
    sensor_mode: SensorMode,
    last_temperature: Option<f64>,
    sensor_interval: Duration,
    sensor_rng: Option<StdRng>,
    sensor: Option<OwnedSensor>,
}

impl AirCondition {
    /// Powered off, sensor in simulated mode.
    pub fn new(sensor_interval: Duration, sensor_rng: StdRng) -> Self {
        Self {
            on: false,
            sensor_mode: SensorMode::Simulated,
            last_temperature: None,
            sensor_interval,
            sensor_rng: Some(sensor_rng),
            sensor: None,
        }
    }

    /// Single-threshold hysteresis. Returns the new power state if it changed.
    pub fn apply_reading(&mut self, temperature: f64) -> Option<bool> {
        self.last_temperature = Some(temperature);
        if temperature > POWER_THRESHOLD && !self.on {
            self.on = true;
            Some(true)
        } else if temperature <= POWER_THRESHOLD && self.on {
            self.on = false;
            Some(false)
        } else {
            None
        }
    }

    fn tell_sensor(&self, message: TemperatureSensorMessage) {
        match &self.sensor {
            Some(sensor) => {
                if let Err(e) = sensor.address.tell(message) {
                    warn!(error = %e, "Temperature sensor unreachable");
                }
            }
            None => warn!(?message, "No temperature sensor attached"),
        }
    }
}

fn power_label(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

#[async_trait]
impl Device for AirCondition {
    type Message = AirConditionMessage;
    type Context = ();

    async fn on_start(&mut self, scope: &mut Scope<Self>, _ctx: &()) {
        let Some(myself) = scope.myself() else {
            warn!("Air condition has no address, sensor not started");
            return;
        };
        let rng = self.sensor_rng.take().unwrap_or_else(StdRng::from_entropy);
        let (actor, address) = DeviceActor::new(TemperatureSensor::new(self.sensor_interval, rng));
        let handle = tokio::spawn(actor.run(myself.recipient(AirConditionMessage::Temperature)));
        self.sensor = Some(OwnedSensor { address, handle });
        self.tell_sensor(TemperatureSensorMessage::SwitchMode(self.sensor_mode));
    }

    async fn handle(&mut self, message: AirConditionMessage, _scope: &mut Scope<Self>, _ctx: &()) {
        match message {
            AirConditionMessage::Temperature(temperature) => {
                info!(temperature, unit = "Celsius", "Air condition reading");
                if let Some(on) = self.apply_reading(temperature) {
                    info!(power = power_label(on), temperature, "Air condition switched");
                }
            }
            AirConditionMessage::SetPower(on) => {
                self.on = on;
                info!(power = power_label(on), "Air condition manually switched");
            }
            AirConditionMessage::SwitchSensorMode(mode) => {
                info!(%mode, "Switching sensor mode");
                self.sensor_mode = mode;
                self.tell_sensor(TemperatureSensorMessage::SwitchMode(mode));
            }
            AirConditionMessage::SubmitReading(temperature) => {
                self.tell_sensor(TemperatureSensorMessage::ManualReading(temperature));
            }
            AirConditionMessage::GetStatus { reply } => {
                let _ = reply.send(AirConditionStatus {
                    on: self.on,
                    sensor_mode: self.sensor_mode,
                    last_temperature: self.last_temperature,
                });
            }
        }
    }

    async fn on_stop(&mut self, _scope: &mut Scope<Self>, _ctx: &()) {
        if let Some(sensor) = self.sensor.take() {
            let _ = sensor.address.stop();
            if let Err(e) = sensor.handle.await {
                warn!(error = %e, "Temperature sensor task failed");
            }
        }
    }
}
