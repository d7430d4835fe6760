//! Temperature sensor owned by the air condition.

use crate::model::{SensorMode, SensorStatus};
use async_trait::async_trait;
use device_actor::{Device, Recipient, Reply, Scope};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, warn};

const TICK_TIMER: &str = "temperature-tick";

#[derive(Debug)]
pub enum TemperatureSensorMessage {
    SwitchMode(SensorMode),
    /// Timer-driven simulated reading.
    Tick,
    /// Externally supplied reading, forwarded only in manual mode.
    ManualReading(f64),
    GetStatus { reply: Reply<SensorStatus<f64>> },
}

/// Produces readings in degrees Celsius for its owner.
///
/// In simulated mode a periodic timer draws a value in `[20, 30)`; in manual
/// mode only [`ManualReading`](TemperatureSensorMessage::ManualReading) passes.
/// The context is where readings go.
pub struct TemperatureSensor {
    mode: SensorMode,
    last_reading: Option<f64>,
    interval: Duration,
    rng: StdRng,
}

impl TemperatureSensor {
    /// Starts in manual mode with no timer running.
    pub fn new(interval: Duration, rng: StdRng) -> Self {
        Self {
            mode: SensorMode::Manual,
            last_reading: None,
            interval,
            rng,
        }
    }

    fn forward(&mut self, reading: f64, owner: &Recipient<f64>) {
        self.last_reading = Some(reading);
        if owner.tell(reading).is_err() {
            warn!(reading, "Temperature owner unreachable");
        }
    }
}

#[async_trait]
impl Device for TemperatureSensor {
    type Message = TemperatureSensorMessage;
    type Context = Recipient<f64>;

    async fn handle(
        &mut self,
        message: TemperatureSensorMessage,
        scope: &mut Scope<Self>,
        owner: &Recipient<f64>,
    ) {
        match message {
            TemperatureSensorMessage::SwitchMode(mode) => {
                self.mode = mode;
                match mode {
                    SensorMode::Simulated => scope.timers().start_periodic(
                        TICK_TIMER,
                        self.interval,
                        || TemperatureSensorMessage::Tick,
                    ),
                    SensorMode::Manual => {
                        scope.timers().cancel(TICK_TIMER);
                    }
                }
                info!(%mode, "Temperature sensor mode switched");
            }
            TemperatureSensorMessage::Tick => {
                if self.mode == SensorMode::Simulated {
                    let reading = self.rng.gen_range(20.0..30.0);
                    debug!(reading, "Simulated temperature");
                    self.forward(reading, owner);
                }
            }
            TemperatureSensorMessage::ManualReading(reading) => {
                if self.mode == SensorMode::Manual {
                    info!(reading, "Manual temperature input");
                    self.forward(reading, owner);
                } else {
                    debug!(reading, "Ignoring manual reading in simulated mode");
                }
            }
            TemperatureSensorMessage::GetStatus { reply } => {
                let _ = reply.send(SensorStatus {
                    mode: self.mode,
                    last_reading: self.last_reading,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use device_actor::mock::create_recipient_probe;
    use device_actor::DeviceActor;
    use rand::SeedableRng;

    const INTERVAL: Duration = Duration::from_secs(5);

    #[tokio::test(start_paused = true)]
    async fn test_simulated_mode_ticks_in_range() {
        let (owner, mut readings) = create_recipient_probe::<f64>();
        let (actor, sensor) = DeviceActor::new(TemperatureSensor::new(INTERVAL, StdRng::seed_from_u64(7)));
        let handle = tokio::spawn(actor.run(owner));

        sensor
            .tell(TemperatureSensorMessage::SwitchMode(SensorMode::Simulated))
            .unwrap();
        for _ in 0..3 {
            let reading = readings.expect_message_within(INTERVAL * 2).await.unwrap();
            assert!((20.0..30.0).contains(&reading), "{reading} out of range");
        }

        sensor.stop().unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_mode_forwards_only_explicit_readings() {
        let (owner, mut readings) = create_recipient_probe::<f64>();
        let (actor, sensor) = DeviceActor::new(TemperatureSensor::new(INTERVAL, StdRng::seed_from_u64(7)));
        let handle = tokio::spawn(actor.run(owner));

        sensor
            .tell(TemperatureSensorMessage::SwitchMode(SensorMode::Simulated))
            .unwrap();
        sensor
            .tell(TemperatureSensorMessage::SwitchMode(SensorMode::Manual))
            .unwrap();
        sensor.tell(TemperatureSensorMessage::ManualReading(26.5)).unwrap();
        assert_eq!(readings.expect_message().await, Some(26.5));

        // The periodic timer was cancelled by the switch.
        tokio::time::sleep(INTERVAL * 4).await;
        readings.expect_no_message();

        let status = sensor
            .ask(|reply| TemperatureSensorMessage::GetStatus { reply }, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(
            status,
            SensorStatus {
                mode: SensorMode::Manual,
                last_reading: Some(26.5)
            }
        );

        sensor.stop().unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_simulated_mode_ignores_manual_readings() {
        let (owner, mut readings) = create_recipient_probe::<f64>();
        let (actor, sensor) = DeviceActor::new(TemperatureSensor::new(
            Duration::from_secs(3600),
            StdRng::seed_from_u64(7),
        ));
        let handle = tokio::spawn(actor.run(owner));

        sensor
            .tell(TemperatureSensorMessage::SwitchMode(SensorMode::Simulated))
            .unwrap();
        sensor.tell(TemperatureSensorMessage::ManualReading(30.0)).unwrap();
        let status = sensor
            .ask(|reply| TemperatureSensorMessage::GetStatus { reply }, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(status.last_reading, None);
        readings.expect_no_message();

        sensor.stop().unwrap();
        handle.await.unwrap();
    }
}
