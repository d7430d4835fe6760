use crate::environment_actor::{EnvironmentMessage, EnvironmentSnapshot};
use crate::model::{EnvironmentUpdate, WeatherCondition};
use async_trait::async_trait;
use device_actor::{Device, Recipient, Scope};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, warn};

const TICK_TIMER: &str = "environment-tick";
const WEATHER_CHANGE_PROBABILITY: f64 = 0.1;

/// Synthetic temperature and weather source.
///
/// While running, every tick drifts the temperature by up to one degree
/// either way and occasionally resamples the weather, then publishes both.
pub struct EnvironmentSimulator {
    running: bool,
    temperature: f64,
    weather: WeatherCondition,
    interval: Duration,
    rng: StdRng,
    listeners: Vec<Recipient<EnvironmentUpdate>>,
}

impl EnvironmentSimulator {
    /// Stopped, 23.0°C and sunny.
    pub fn new(interval: Duration, rng: StdRng) -> Self {
        Self {
            running: false,
            temperature: 23.0,
            weather: WeatherCondition::Sunny,
            interval,
            rng,
            listeners: Vec::new(),
        }
    }

    fn publish(&self) {
        for listener in &self.listeners {
            let sent = listener
                .tell(EnvironmentUpdate::Temperature(self.temperature))
                .and_then(|()| listener.tell(EnvironmentUpdate::Weather(self.weather)));
            if let Err(e) = sent {
                warn!(error = %e, "Environment listener unreachable");
            }
        }
    }

    fn drift(&mut self) {
        let change: f64 = self.rng.gen_range(-1.0..1.0);
        self.temperature = ((self.temperature + change) * 10.0).round() / 10.0;
        if self.rng.gen_bool(WEATHER_CHANGE_PROBABILITY) {
            if let Some(weather) = WeatherCondition::ALL.choose(&mut self.rng) {
                self.weather = *weather;
            }
        }
    }
}

#[async_trait]
impl Device for EnvironmentSimulator {
    type Message = EnvironmentMessage;
    type Context = ();

    async fn handle(&mut self, message: EnvironmentMessage, scope: &mut Scope<Self>, _ctx: &()) {
        match message {
            EnvironmentMessage::Subscribe(listener) => {
                debug!("Environment listener subscribed");
                self.listeners.push(listener);
            }
            EnvironmentMessage::Start => {
                if !self.running {
                    self.running = true;
                    scope
                        .timers()
                        .start_periodic(TICK_TIMER, self.interval, || EnvironmentMessage::Tick);
                    info!("Environment simulator started");
                    self.publish();
                }
            }
            EnvironmentMessage::Stop => {
                if self.running {
                    self.running = false;
                    scope.timers().cancel(TICK_TIMER);
                    info!("Environment simulator stopped");
                }
            }
            EnvironmentMessage::Tick => {
                if self.running {
                    self.drift();
                    info!(temperature = self.temperature, weather = %self.weather, "Environment update");
                    self.publish();
                }
            }
            EnvironmentMessage::SetTemperature(temperature) => {
                self.temperature = temperature;
                info!(temperature, "Temperature manually set");
                self.publish();
            }
            EnvironmentMessage::SetWeather(weather) => {
                self.weather = weather;
                info!(%weather, "Weather condition manually set");
                self.publish();
            }
            EnvironmentMessage::GetSnapshot { reply } => {
                let _ = reply.send(EnvironmentSnapshot {
                    running: self.running,
                    temperature: self.temperature,
                    weather: self.weather,
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

    const INTERVAL: Duration = Duration::from_secs(10);

    fn simulator() -> EnvironmentSimulator {
        EnvironmentSimulator::new(INTERVAL, StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_drift_is_bounded_and_rounded() {
        let mut sim = simulator();
        for _ in 0..200 {
            let before = sim.temperature;
            sim.drift();
            assert!((sim.temperature - before).abs() <= 1.05);
            let tenths = sim.temperature * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-6);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_publishes_and_is_idempotent() {
        let (listener, mut updates) = create_recipient_probe::<EnvironmentUpdate>();
        let (actor, env) = DeviceActor::new(simulator());
        let handle = tokio::spawn(actor.run(()));

        env.tell(EnvironmentMessage::Subscribe(listener)).unwrap();
        env.tell(EnvironmentMessage::Start).unwrap();
        env.tell(EnvironmentMessage::Start).unwrap();
        assert_eq!(
            updates.expect_message().await,
            Some(EnvironmentUpdate::Temperature(23.0))
        );
        assert_eq!(
            updates.expect_message().await,
            Some(EnvironmentUpdate::Weather(WeatherCondition::Sunny))
        );
        let snapshot = env
            .ask(|reply| EnvironmentMessage::GetSnapshot { reply }, Duration::from_secs(1))
            .await
            .unwrap();
        assert!(snapshot.running);
        updates.expect_no_message();

        // One period later a tick republishes both values.
        assert!(matches!(
            updates.expect_message_within(INTERVAL * 2).await,
            Some(EnvironmentUpdate::Temperature(_))
        ));
        assert!(matches!(
            updates.expect_message().await,
            Some(EnvironmentUpdate::Weather(_))
        ));

        env.stop().unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_ticks_but_setters_still_publish() {
        let (listener, mut updates) = create_recipient_probe::<EnvironmentUpdate>();
        let (actor, env) = DeviceActor::new(simulator());
        let handle = tokio::spawn(actor.run(()));

        env.tell(EnvironmentMessage::Subscribe(listener)).unwrap();
        env.tell(EnvironmentMessage::Start).unwrap();
        env.tell(EnvironmentMessage::Stop).unwrap();
        env.tell(EnvironmentMessage::Stop).unwrap();
        env.ask(|reply| EnvironmentMessage::GetSnapshot { reply }, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(updates.drain().len(), 2);

        tokio::time::advance(INTERVAL * 3).await;
        tokio::task::yield_now().await;
        updates.expect_no_message();

        env.tell(EnvironmentMessage::SetWeather(WeatherCondition::Snowy)).unwrap();
        assert_eq!(
            updates.expect_message().await,
            Some(EnvironmentUpdate::Temperature(23.0))
        );
        assert_eq!(
            updates.expect_message().await,
            Some(EnvironmentUpdate::Weather(WeatherCondition::Snowy))
        );

        env.stop().unwrap();
        handle.await.unwrap();
    }
}
