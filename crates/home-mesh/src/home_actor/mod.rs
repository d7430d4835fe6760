//! # Home Actor
//!
//! The supervisor. It selects the active environment source (internal
//! simulator, external feed or manual input), keeps the sensors' modes in line
//! with that choice and routes environment updates to the devices.
//!
//! ## Structure
//!
//! - [`entity`] - [`Home`] and its [`HomeContext`]
//! - [`actions`] - [`HomeMessage`]
//! - [`error`] - [`HomeError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use device_actor::{DeviceActor, DeviceRef};

/// Creates a new Home supervisor and its address. Run it with a [`HomeContext`].
pub fn new() -> (DeviceActor<Home>, DeviceRef<Home>) {
    DeviceActor::new(Home::new())
}
