//! # Home Mesh
//!
//! A smart-home device mesh built on [`device_actor`]. Every device is an
//! independently scheduled state machine that talks to the others only
//! through messages.
//!
//! ## Devices
//!
//! - [`air_condition_actor`]: air condition with hysteresis, plus its temperature sensor
//! - [`blinds_actor`]: blinds with manual, movie and weather priorities, plus the weather sensor
//! - [`media_actor`]: media station playing one movie at a time
//! - [`fridge_actor`]: fridge with capacity limits, ordering and auto-reorder
//! - [`environment_actor`]: environment simulator and external feed
//! - [`home_actor`]: supervisor choosing the environment source
//!
//! ## Around them
//!
//! - [`model`]: products, orders, receipts, prices and environment values
//! - [`backend`]: the order backend port and an in-process implementation
//! - [`clients`]: typed command surface with bounded timeouts
//! - [`lifecycle`]: configuration, tracing and the [`HomeSystem`](lifecycle::HomeSystem)

pub mod air_condition_actor;
pub mod backend;
pub mod blinds_actor;
pub mod clients;
pub mod environment_actor;
pub mod fridge_actor;
pub mod home_actor;
pub mod lifecycle;
pub mod media_actor;
pub mod model;
