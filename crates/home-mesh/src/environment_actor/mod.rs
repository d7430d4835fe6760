//! # Environment Actors
//!
//! Two interchangeable sources of [`EnvironmentUpdate`](crate::model::EnvironmentUpdate)s:
//!
//! - [`EnvironmentSimulator`] generates readings on a timer.
//! - [`ExternalFeed`] decodes readings delivered by a pub/sub transport.
//!
//! The supervisor subscribes to both and decides which one counts.

pub mod actions;
pub mod entity;
pub mod feed;

pub use actions::*;
pub use entity::*;
pub use feed::{ExternalFeed, FeedError, FeedMessage, TEMPERATURE_TOPIC, WEATHER_TOPIC};

use device_actor::{DeviceActor, DeviceRef};
use rand::rngs::StdRng;
use std::time::Duration;

/// Creates a new Environment Simulator actor and its address.
pub fn new(interval: Duration, rng: StdRng) -> (DeviceActor<EnvironmentSimulator>, DeviceRef<EnvironmentSimulator>) {
    DeviceActor::new(EnvironmentSimulator::new(interval, rng))
}

/// Creates a new External Feed actor and its address.
pub fn new_feed() -> (DeviceActor<ExternalFeed>, DeviceRef<ExternalFeed>) {
    DeviceActor::new(ExternalFeed::new())
}
