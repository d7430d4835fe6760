//! # Air Condition Client
//!
//! Command surface for the air condition. Commands are fire-and-forget;
//! `get_status` waits for a reply within the configured timeout.

use crate::air_condition_actor::{AirCondition, AirConditionMessage, AirConditionStatus};
use crate::clients::DeviceError;
use crate::model::SensorMode;
use device_actor::DeviceClient;
use tracing::instrument;

crate::device_client!(AirConditionClient, AirCondition, DeviceError);
crate::ask_methods!(AirConditionClient, AirCondition, AirConditionMessage, DeviceError, [
    GetStatus => AirConditionStatus,
]);

impl AirConditionClient {
    #[instrument(skip(self))]
    pub fn set_power(&self, on: bool) -> Result<(), DeviceError> {
        self.tell(AirConditionMessage::SetPower(on))
    }

    #[instrument(skip(self))]
    pub fn switch_sensor_mode(&self, mode: SensorMode) -> Result<(), DeviceError> {
        self.tell(AirConditionMessage::SwitchSensorMode(mode))
    }

    /// Only reaches the unit while the sensor is in manual mode.
    #[instrument(skip(self))]
    pub fn submit_reading(&self, temperature: f64) -> Result<(), DeviceError> {
        self.tell(AirConditionMessage::SubmitReading(temperature))
    }
}
