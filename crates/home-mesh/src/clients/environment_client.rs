use crate::clients::DeviceError;
use crate::environment_actor::{
    EnvironmentMessage, EnvironmentSimulator, EnvironmentSnapshot, ExternalFeed, FeedMessage,
};
use crate::model::WeatherCondition;
use device_actor::DeviceClient;
use tracing::instrument;

crate::device_client!(SimulatorClient, EnvironmentSimulator, DeviceError);
crate::ask_methods!(SimulatorClient, EnvironmentSimulator, EnvironmentMessage, DeviceError, [
    GetSnapshot => EnvironmentSnapshot,
]);

impl SimulatorClient {
    #[instrument(skip(self))]
    pub fn set_temperature(&self, temperature: f64) -> Result<(), DeviceError> {
        self.tell(EnvironmentMessage::SetTemperature(temperature))
    }

    #[instrument(skip(self))]
    pub fn set_weather(&self, weather: WeatherCondition) -> Result<(), DeviceError> {
        self.tell(EnvironmentMessage::SetWeather(weather))
    }
}

crate::device_client!(
    /// Ingestion port for the external environment feed.
    FeedClient,
    ExternalFeed,
    DeviceError
);
crate::ask_methods!(FeedClient, ExternalFeed, FeedMessage, DeviceError, [
    IsConnected => bool,
]);

impl FeedClient {
    /// Hands one raw message from the pub/sub transport to the feed.
    #[instrument(skip(self, payload))]
    pub fn deliver(&self, topic: &str, payload: &str) -> Result<(), DeviceError> {
        self.tell(FeedMessage::Deliver {
            topic: topic.to_string(),
            payload: payload.to_string(),
        })
    }
}
