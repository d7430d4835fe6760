use crate::model::SensorMode;
use device_actor::Reply;

#[derive(Debug)]
pub enum AirConditionMessage {
    /// A reading in degrees Celsius, from the owned sensor or the supervisor.
    Temperature(f64),
    /// Manual power command. Bypasses the sensor and the hysteresis.
    SetPower(bool),
    /// Forwarded to the owned sensor.
    SwitchSensorMode(SensorMode),
    /// Forwarded to the owned sensor as a manual reading.
    SubmitReading(f64),
    GetStatus { reply: Reply<AirConditionStatus> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirConditionStatus {
    pub on: bool,
    pub sensor_mode: SensorMode,
    pub last_temperature: Option<f64>,
}
