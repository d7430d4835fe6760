//! External environment feed.
//!
//! Accepts raw `(topic, payload)` deliveries from a publish/subscribe
//! transport, decodes them and republishes them as [`EnvironmentUpdate`]s.
//! The transport itself lives outside this crate.

use crate::model::{EnvironmentUpdate, UnknownVariant, WeatherCondition};
use async_trait::async_trait;
use device_actor::{Device, Recipient, Reply, Scope};
use serde::Deserialize;
use tracing::{debug, info, warn};

pub const TEMPERATURE_TOPIC: &str = "environment/temperature";
pub const WEATHER_TOPIC: &str = "environment/weather";

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("unknown topic '{0}'")]
    UnknownTopic(String),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error(transparent)]
    UnknownCondition(#[from] UnknownVariant),
}

#[derive(Debug, Deserialize)]
struct TemperaturePayload {
    value: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherPayload {
    condition: String,
}

/// Decodes one delivery. Weather conditions are matched case-insensitively.
pub fn decode(topic: &str, payload: &str) -> Result<EnvironmentUpdate, FeedError> {
    match topic {
        TEMPERATURE_TOPIC => {
            let reading: TemperaturePayload = serde_json::from_str(payload)?;
            Ok(EnvironmentUpdate::Temperature(reading.value))
        }
        WEATHER_TOPIC => {
            let reading: WeatherPayload = serde_json::from_str(payload)?;
            let condition: WeatherCondition = reading.condition.parse()?;
            Ok(EnvironmentUpdate::Weather(condition))
        }
        other => Err(FeedError::UnknownTopic(other.to_string())),
    }
}

#[derive(Debug)]
pub enum FeedMessage {
    Connect,
    Disconnect,
    Subscribe(Recipient<EnvironmentUpdate>),
    Deliver { topic: String, payload: String },
    IsConnected { reply: Reply<bool> },
}

/// Publishes decoded feed values to its listeners while connected.
#[derive(Default)]
pub struct ExternalFeed {
    connected: bool,
    listeners: Vec<Recipient<EnvironmentUpdate>>,
}

impl ExternalFeed {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Device for ExternalFeed {
    type Message = FeedMessage;
    type Context = ();

    async fn handle(&mut self, message: FeedMessage, _scope: &mut Scope<Self>, _ctx: &()) {
        match message {
            FeedMessage::Connect => {
                if !self.connected {
                    self.connected = true;
                    info!(topics = ?[TEMPERATURE_TOPIC, WEATHER_TOPIC], "External feed connected");
                }
            }
            FeedMessage::Disconnect => {
                if self.connected {
                    self.connected = false;
                    info!("External feed disconnected");
                }
            }
            FeedMessage::Subscribe(listener) => {
                self.listeners.push(listener);
            }
            FeedMessage::Deliver { topic, payload } => {
                if !self.connected {
                    debug!(%topic, "Delivery while disconnected ignored");
                    return;
                }
                debug!(%topic, %payload, "Feed message received");
                match decode(&topic, &payload) {
                    Ok(update) => {
                        for listener in &self.listeners {
                            if let Err(e) = listener.tell(update) {
                                warn!(error = %e, "Feed listener unreachable");
                            }
                        }
                    }
                    Err(e) => warn!(%topic, error = %e, "Dropping feed message"),
                }
            }
            FeedMessage::IsConnected { reply } => {
                let _ = reply.send(self.connected);
            }
        }
    }

    async fn on_stop(&mut self, _scope: &mut Scope<Self>, _ctx: &()) {
        if self.connected {
            self.connected = false;
            info!("External feed disconnected on stop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use device_actor::mock::create_recipient_probe;
    use device_actor::DeviceActor;

    #[test]
    fn test_decode_payloads() {
        assert_eq!(
            decode(TEMPERATURE_TOPIC, r#"{"value": 27.5}"#).unwrap(),
            EnvironmentUpdate::Temperature(27.5)
        );
        assert_eq!(
            decode(WEATHER_TOPIC, r#"{"condition": "rainy"}"#).unwrap(),
            EnvironmentUpdate::Weather(WeatherCondition::Rainy)
        );
        assert!(matches!(
            decode(WEATHER_TOPIC, r#"{"condition": "FOGGY"}"#),
            Err(FeedError::UnknownCondition(_))
        ));
        assert!(matches!(
            decode(TEMPERATURE_TOPIC, "not json"),
            Err(FeedError::Payload(_))
        ));
        assert!(matches!(
            decode("environment/humidity", "{}"),
            Err(FeedError::UnknownTopic(_))
        ));
    }

    #[tokio::test]
    async fn test_forwards_only_while_connected() {
        let (listener, mut updates) = create_recipient_probe::<EnvironmentUpdate>();
        let (actor, feed) = DeviceActor::new(ExternalFeed::new());
        let handle = tokio::spawn(actor.run(()));
        let deliver = |topic: &str, payload: &str| FeedMessage::Deliver {
            topic: topic.to_string(),
            payload: payload.to_string(),
        };

        feed.tell(FeedMessage::Subscribe(listener)).unwrap();
        feed.tell(deliver(TEMPERATURE_TOPIC, r#"{"value": 30.0}"#)).unwrap();
        feed.tell(FeedMessage::Connect).unwrap();
        feed.tell(deliver(WEATHER_TOPIC, r#"{"condition": "FOGGY"}"#)).unwrap();
        feed.tell(deliver(TEMPERATURE_TOPIC, r#"{"value": 18.5}"#)).unwrap();
        assert_eq!(
            updates.expect_message().await,
            Some(EnvironmentUpdate::Temperature(18.5))
        );

        feed.tell(FeedMessage::Disconnect).unwrap();
        feed.tell(deliver(WEATHER_TOPIC, r#"{"condition": "SUNNY"}"#)).unwrap();
        let connected = feed
            .ask(|reply| FeedMessage::IsConnected { reply }, std::time::Duration::from_secs(1))
            .await
            .unwrap();
        assert!(!connected);
        updates.expect_no_message();

        feed.stop().unwrap();
        handle.await.unwrap();
    }
}
