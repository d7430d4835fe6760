//! # Fridge Actor
//!
//! Tracks stock, enforces weight and item-count limits, and orders groceries
//! through an [`OrderBackend`](crate::backend::OrderBackend). Consuming a
//! product down to the low-stock threshold (or to zero) reorders it.
//!
//! ## Structure
//!
//! - [`entity`] - [`Fridge`] and [`FridgeConfig`]
//! - [`actions`] - [`FridgeMessage`], [`FridgeContents`]
//! - [`inventory`] - [`Inventory`]
//! - [`error`] - [`FridgeError`]

pub mod actions;
pub mod entity;
pub mod error;
pub mod inventory;

pub use actions::*;
pub use entity::*;
pub use error::*;
pub use inventory::*;

use device_actor::{DeviceActor, DeviceRef};

/// Creates a new Fridge actor and its address.
pub fn new(config: FridgeConfig, inventory: Inventory) -> (DeviceActor<Fridge>, DeviceRef<Fridge>) {
    DeviceActor::new(Fridge::new(config, inventory))
}
