use crate::blinds_actor::{
    Blinds, BlindsMessage, BlindsStatus, WeatherSensor, WeatherSensorMessage,
};
use crate::clients::DeviceError;
use crate::model::{SensorMode, SensorStatus, WeatherCondition};
use device_actor::DeviceClient;
use tracing::instrument;

crate::device_client!(BlindsClient, Blinds, DeviceError);
crate::ask_methods!(BlindsClient, Blinds, BlindsMessage, DeviceError, [
    GetStatus => BlindsStatus,
]);

impl BlindsClient {
    /// Opens (`true`) or closes the blinds and suspends weather automation.
    #[instrument(skip(self))]
    pub fn manual_override(&self, open: bool) -> Result<(), DeviceError> {
        self.tell(BlindsMessage::ManualOverride(open))
    }

    #[instrument(skip(self))]
    pub fn resume_automatic(&self) -> Result<(), DeviceError> {
        self.tell(BlindsMessage::ResumeAutomatic)
    }
}

crate::device_client!(WeatherSensorClient, WeatherSensor, DeviceError);
crate::ask_methods!(WeatherSensorClient, WeatherSensor, WeatherSensorMessage, DeviceError, [
    GetStatus => SensorStatus<WeatherCondition>,
]);

impl WeatherSensorClient {
    #[instrument(skip(self))]
    pub fn switch_mode(&self, mode: SensorMode) -> Result<(), DeviceError> {
        self.tell(WeatherSensorMessage::SwitchMode(mode))
    }

    #[instrument(skip(self))]
    pub fn read_weather(&self, condition: WeatherCondition) -> Result<(), DeviceError> {
        self.tell(WeatherSensorMessage::ReadWeather(condition))
    }
}
