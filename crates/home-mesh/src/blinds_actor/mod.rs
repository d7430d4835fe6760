//! # Blinds Actor
//!
//! Window blinds and the weather sensor that drives them.
//!
//! ## Structure
//!
//! - [`entity`] - [`Blinds`] and its priority rules
//! - [`actions`] - [`BlindsMessage`] and [`BlindsStatus`]
//! - [`weather_sensor`] - the [`WeatherSensor`] device
//!
//! Manual override is permanent until an explicit
//! [`ResumeAutomatic`](BlindsMessage::ResumeAutomatic); nothing clears it on a
//! timer.

pub mod actions;
pub mod entity;
pub mod weather_sensor;

pub use actions::*;
pub use entity::*;
pub use weather_sensor::*;

use device_actor::{DeviceActor, DeviceRef};
use rand::rngs::StdRng;
use std::time::Duration;

/// Creates a new Blinds actor (open, automatic) and its address.
pub fn new() -> (DeviceActor<Blinds>, DeviceRef<Blinds>) {
    DeviceActor::new(Blinds::default())
}

/// Creates a weather sensor in manual mode. Run it with a recipient for the blinds.
pub fn new_weather_sensor(interval: Duration, rng: StdRng) -> (DeviceActor<WeatherSensor>, DeviceRef<WeatherSensor>) {
    DeviceActor::new(WeatherSensor::new(interval, rng))
}
