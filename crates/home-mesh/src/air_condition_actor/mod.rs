//! # Air Condition Actor
//!
//! An air conditioning unit driven by temperature readings, plus the
//! temperature sensor it owns.
//!
//! ## Structure
//!
//! - [`entity`] - [`Device`](device_actor::Device) implementation for [`AirCondition`]
//! - [`actions`] - [`AirConditionMessage`] and [`AirConditionStatus`]
//! - [`sensor`] - the [`TemperatureSensor`] device
//! - [`new()`] - Factory function that creates the actor and its address
//!
//! ## Behaviour
//!
//! - A reading above [`POWER_THRESHOLD`] switches the unit on if it is off; a
//!   reading at or below switches it off if it is on. Anything else is ignored.
//! - `SetPower` sets the power directly. The next reading may override it again.
//! - `SwitchSensorMode` and `SubmitReading` are forwarded to the sensor, which
//!   decides whether a manual reading reaches the unit.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, address) = air_condition_actor::new(Duration::from_secs(5), rng);
//! tokio::spawn(actor.run(()));
//!
//! let client = AirConditionClient::new(address, Duration::from_secs(2));
//! client.switch_sensor_mode(SensorMode::Manual)?;
//! client.submit_reading(27.0)?;
//! ```

pub mod actions;
pub mod entity;
pub mod sensor;

pub use actions::*;
pub use entity::*;
pub use sensor::*;

use device_actor::{DeviceActor, DeviceRef};
use rand::rngs::StdRng;
use std::time::Duration;

/// Creates a new Air Condition actor and its address.
pub fn new(sensor_interval: Duration, sensor_rng: StdRng) -> (DeviceActor<AirCondition>, DeviceRef<AirCondition>) {
    DeviceActor::new(AirCondition::new(sensor_interval, sensor_rng))
}
