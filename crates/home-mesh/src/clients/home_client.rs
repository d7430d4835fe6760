use crate::home_actor::{Home, HomeError, HomeMessage};
use crate::model::{EnvironmentSource, WeatherCondition};
use device_actor::DeviceClient;
use tracing::instrument;

crate::device_client!(
    /// Client for the home supervisor.
    HomeClient,
    Home,
    HomeError
);
crate::ask_methods!(HomeClient, Home, HomeMessage, HomeError, [
    GetEnvironmentSource => EnvironmentSource,
]);

impl HomeClient {
    #[instrument(skip(self))]
    pub fn start(&self) -> Result<(), HomeError> {
        self.tell(HomeMessage::Start)
    }

    #[instrument(skip(self))]
    pub fn switch_environment_source(&self, source: EnvironmentSource) -> Result<(), HomeError> {
        self.tell(HomeMessage::SwitchEnvironmentSource(source))
    }

    /// Fails with [`HomeError::NotManual`] unless the source is manual.
    #[instrument(skip(self))]
    pub async fn set_environment_values(
        &self,
        temperature: Option<f64>,
        weather: Option<WeatherCondition>,
    ) -> Result<(), HomeError> {
        self.ask(move |reply| HomeMessage::SetEnvironmentValues {
            temperature,
            weather,
            reply,
        })
        .await
        .and_then(std::convert::identity)
    }
}
