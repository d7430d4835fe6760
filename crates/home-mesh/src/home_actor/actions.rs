use crate::home_actor::HomeError;
use crate::model::{EnvironmentSource, EnvironmentUpdate, WeatherCondition};
use device_actor::Reply;

#[derive(Debug)]
pub enum HomeMessage {
    /// Activates the selected environment source (internal by default).
    Start,
    SwitchEnvironmentSource(EnvironmentSource),
    /// Accepted only while the source is manual.
    SetEnvironmentValues {
        temperature: Option<f64>,
        weather: Option<WeatherCondition>,
        reply: Reply<Result<(), HomeError>>,
    },
    /// An update from one of the sources, tagged by its adapter.
    Environment {
        source: EnvironmentSource,
        update: EnvironmentUpdate,
    },
    GetEnvironmentSource {
        reply: Reply<EnvironmentSource>,
    },
}
