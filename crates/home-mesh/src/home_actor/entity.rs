use crate::air_condition_actor::{AirCondition, AirConditionMessage};
use crate::blinds_actor::{WeatherSensor, WeatherSensorMessage};
use crate::environment_actor::{EnvironmentMessage, EnvironmentSimulator, ExternalFeed, FeedMessage};
use crate::home_actor::{HomeError, HomeMessage};
use crate::model::{EnvironmentSource, EnvironmentUpdate, WeatherCondition};
use async_trait::async_trait;
use device_actor::{Device, DeviceRef, FrameworkError, Scope};
use tracing::{debug, info, warn};

/// Addresses the supervisor routes to.
#[derive(Debug, Clone)]
pub struct HomeContext {
    pub air_condition: DeviceRef<AirCondition>,
    pub weather_sensor: DeviceRef<WeatherSensor>,
    pub simulator: DeviceRef<EnvironmentSimulator>,
    pub feed: DeviceRef<ExternalFeed>,
}

/// Supervisor owning the environment source selection.
///
/// Both sources publish to the supervisor through adapters that tag every
/// update with its origin; only updates from the current source are routed
/// on. Temperature goes to the air condition, weather to the weather sensor.
pub struct Home {
    source: EnvironmentSource,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            source: EnvironmentSource::Internal,
        }
    }
}

impl Home {
    pub fn new() -> Self {
        Self::default()
    }

    fn activate(&self, ctx: &HomeContext) -> Result<(), FrameworkError> {
        match self.source {
            EnvironmentSource::Internal => ctx.simulator.tell(EnvironmentMessage::Start)?,
            EnvironmentSource::External => ctx.feed.tell(FeedMessage::Connect)?,
            EnvironmentSource::Manual => {}
        }
        let mode = self.source.sensor_mode();
        ctx.air_condition
            .tell(AirConditionMessage::SwitchSensorMode(mode))?;
        ctx.weather_sensor.tell(WeatherSensorMessage::SwitchMode(mode))
    }

    fn deactivate(&self, ctx: &HomeContext) -> Result<(), FrameworkError> {
        match self.source {
            EnvironmentSource::Internal => ctx.simulator.tell(EnvironmentMessage::Stop),
            EnvironmentSource::External => ctx.feed.tell(FeedMessage::Disconnect),
            EnvironmentSource::Manual => Ok(()),
        }
    }

    fn route(&self, update: EnvironmentUpdate, ctx: &HomeContext) -> Result<(), FrameworkError> {
        match update {
            EnvironmentUpdate::Temperature(t) => ctx.air_condition.tell(AirConditionMessage::Temperature(t)),
            EnvironmentUpdate::Weather(c) => ctx
                .weather_sensor
                .tell(WeatherSensorMessage::EnvironmentUpdate(c)),
        }
    }

    fn set_manual_values(
        &self,
        temperature: Option<f64>,
        weather: Option<WeatherCondition>,
        ctx: &HomeContext,
    ) -> Result<(), HomeError> {
        if self.source != EnvironmentSource::Manual {
            warn!(source = %self.source, "Cannot set environment values manually when not in MANUAL mode");
            return Err(HomeError::NotManual(self.source));
        }
        if let Some(temperature) = temperature {
            info!(temperature, "Manually setting temperature");
            ctx.air_condition
                .tell(AirConditionMessage::Temperature(temperature))?;
        }
        if let Some(weather) = weather {
            info!(%weather, "Manually setting weather");
            ctx.weather_sensor
                .tell(WeatherSensorMessage::ReadWeather(weather))?;
        }
        Ok(())
    }
}

#[async_trait]
impl Device for Home {
    type Message = HomeMessage;
    type Context = HomeContext;

    async fn on_start(&mut self, scope: &mut Scope<Self>, ctx: &HomeContext) {
        let Some(myself) = scope.myself() else {
            return;
        };
        let internal = myself.recipient(|update| HomeMessage::Environment {
            source: EnvironmentSource::Internal,
            update,
        });
        let external = myself.recipient(|update| HomeMessage::Environment {
            source: EnvironmentSource::External,
            update,
        });
        let subscribed = ctx
            .simulator
            .tell(EnvironmentMessage::Subscribe(internal))
            .and_then(|()| ctx.feed.tell(FeedMessage::Subscribe(external)));
        if let Err(e) = subscribed {
            warn!(error = %e, "Could not subscribe to environment sources");
        }
        info!("Home automation system initialized");
    }

    async fn handle(&mut self, message: HomeMessage, _scope: &mut Scope<Self>, ctx: &HomeContext) {
        match message {
            HomeMessage::Start => {
                info!(source = %self.source, "Starting home automation");
                if let Err(e) = self.activate(ctx) {
                    warn!(error = %e, "Environment source unreachable");
                }
            }
            HomeMessage::SwitchEnvironmentSource(source) => {
                if let Err(e) = self.deactivate(ctx) {
                    warn!(error = %e, source = %self.source, "Could not stop environment source");
                }
                self.source = source;
                info!(%source, "Switching environment source");
                if let Err(e) = self.activate(ctx) {
                    warn!(error = %e, "Environment source unreachable");
                }
            }
            HomeMessage::SetEnvironmentValues {
                temperature,
                weather,
                reply,
            } => {
                let _ = reply.send(self.set_manual_values(temperature, weather, ctx));
            }
            HomeMessage::Environment { source, update } => {
                if source != self.source {
                    debug!(%source, ?update, "Dropping update from inactive source");
                    return;
                }
                if let Err(e) = self.route(update, ctx) {
                    warn!(error = %e, ?update, "Could not route environment update");
                }
            }
            HomeMessage::GetEnvironmentSource { reply } => {
                let _ = reply.send(self.source);
            }
        }
    }
}
