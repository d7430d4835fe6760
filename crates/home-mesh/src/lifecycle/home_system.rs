use crate::backend::OrderBackend;
use crate::blinds_actor::BlindsMessage;
use crate::clients::{
    AirConditionClient, BlindsClient, FeedClient, FridgeClient, HomeClient, MediaClient,
    SimulatorClient, WeatherSensorClient,
};
use crate::fridge_actor::Inventory;
use crate::home_actor::HomeContext;
use crate::lifecycle::Config;
use device_actor::{DeviceClient, FrameworkError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running device mesh.
///
/// `HomeSystem` is responsible for:
/// - **Wiring**: every actor is created first, then run with its context, so
///   the cycles in the mesh (air condition and its sensor, supervisor and the
///   environment sources) can be assembled
/// - **Startup**: activating the internal environment simulator
/// - **Shutdown**: stopping every actor explicitly and joining its task
///
/// ```ignore
/// let config = Config::load()?;
/// let backend = Arc::new(LocalOrderProcessor::default());
/// let system = HomeSystem::start(&config, backend);
///
/// system.media.play_movie("Alien".to_string()).await?;
/// system.shutdown().await?;
/// ```
pub struct HomeSystem {
    pub home: HomeClient,
    pub air_condition: AirConditionClient,
    pub blinds: BlindsClient,
    pub weather_sensor: WeatherSensorClient,
    pub media: MediaClient,
    pub fridge: FridgeClient,
    pub simulator: SimulatorClient,
    pub feed: FeedClient,

    handles: Vec<JoinHandle<()>>,
}

impl HomeSystem {
    /// Creates, wires and starts every device. Must be called inside a Tokio runtime.
    pub fn start(config: &Config, backend: Arc<dyn OrderBackend>) -> Self {
        Self::start_seeded(config, backend, rand::random())
    }

    /// Like [`start`](Self::start) with reproducible simulated readings.
    pub fn start_seeded(config: &Config, backend: Arc<dyn OrderBackend>, seed: u64) -> Self {
        let status = config.status_timeout();
        let command = config.command_timeout();
        let inventory = if config.fridge.stock_defaults {
            Inventory::kitchen_defaults()
        } else {
            Inventory::default()
        };

        // 1. Create actors, no dependencies yet
        let (blinds_actor, blinds) = crate::blinds_actor::new();
        let (weather_actor, weather_sensor) =
            crate::blinds_actor::new_weather_sensor(config.sensor_interval(), StdRng::seed_from_u64(seed));
        let (ac_actor, air_condition) = crate::air_condition_actor::new(
            config.sensor_interval(),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        );
        let (simulator_actor, simulator) = crate::environment_actor::new(
            config.environment_interval(),
            StdRng::seed_from_u64(seed.wrapping_add(2)),
        );
        let (feed_actor, feed) = crate::environment_actor::new_feed();
        let (media_actor, media) = crate::media_actor::new(config.movie_duration());
        let (fridge_actor, fridge) = crate::fridge_actor::new(config.fridge_config(), inventory);
        let (home_actor, home) = crate::home_actor::new();

        // 2. Run them with their contexts injected
        let handles = vec![
            tokio::spawn(blinds_actor.run(())),
            tokio::spawn(weather_actor.run(blinds.recipient(BlindsMessage::Weather))),
            tokio::spawn(ac_actor.run(())),
            tokio::spawn(simulator_actor.run(())),
            tokio::spawn(feed_actor.run(())),
            tokio::spawn(media_actor.run(blinds.clone())),
            tokio::spawn(fridge_actor.run(backend)),
            tokio::spawn(home_actor.run(HomeContext {
                air_condition: air_condition.clone(),
                weather_sensor: weather_sensor.clone(),
                simulator: simulator.clone(),
                feed: feed.clone(),
            })),
        ];

        let system = Self {
            home: HomeClient::new(home, command),
            air_condition: AirConditionClient::new(air_condition, status),
            blinds: BlindsClient::new(blinds, status),
            weather_sensor: WeatherSensorClient::new(weather_sensor, status),
            media: MediaClient::new(media, command),
            fridge: FridgeClient::new(fridge, command, config.order_timeout()),
            simulator: SimulatorClient::new(simulator, status),
            feed: FeedClient::new(feed, status),
            handles,
        };

        // 3. Activate the internal environment simulator
        if let Err(e) = system.home.start() {
            error!(error = %e, "Home supervisor did not start");
        }
        info!("Home system started");
        system
    }

    /// Stops every device and waits for all of them to finish.
    ///
    /// The mesh contains cycles, so dropping the clients alone would not end
    /// it. The supervisor goes first so nothing is routed into devices that
    /// are already gone.
    ///
    /// # Errors
    ///
    /// Returns an error if any device task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down home system...");

        let stops: [Result<(), FrameworkError>; 8] = [
            self.home.inner().stop(),
            self.simulator.inner().stop(),
            self.feed.inner().stop(),
            self.media.inner().stop(),
            self.fridge.inner().stop(),
            self.weather_sensor.inner().stop(),
            self.air_condition.inner().stop(),
            self.blinds.inner().stop(),
        ];
        for stopped in stops {
            if let Err(e) = stopped {
                info!(error = %e, "Device already stopped");
            }
        }

        let mut failures = Vec::new();
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Device task failed");
                failures.push(e.to_string());
            }
        }

        if failures.is_empty() {
            info!("Home system shut down");
            Ok(())
        } else {
            Err(format!("Device tasks failed: {}", failures.join(", ")))
        }
    }
}
