//! # Device Trait
//!
//! The contract every device implements: a message type, a late-bound context,
//! and async lifecycle hooks invoked by the [`DeviceActor`](crate::DeviceActor) loop.

use crate::scope::Scope;
use async_trait::async_trait;
use std::fmt::Debug;

/// A single-threaded, message-driven state machine.
///
/// The runtime calls the hooks in this order:
///
/// 1. [`on_start`](Device::on_start) once, before the first message
/// 2. [`handle`](Device::handle) for every message, strictly one at a time
/// 3. [`on_stop`](Device::on_stop) once, after a stop request or when every
///    address to the device has been dropped
///
/// Hooks receive `&mut self`, so device state needs no synchronization.
/// Validation failures belong in the reply carried by the message; hooks
/// themselves never fail.
#[async_trait]
pub trait Device: Send + Sized + 'static {
    /// Messages accepted by this device.
    type Message: Send + Debug + 'static;

    /// Dependencies injected at `run()` time (other addresses, ports, config).
    type Context: Send + Sync + 'static;

    async fn on_start(&mut self, _scope: &mut Scope<Self>, _ctx: &Self::Context) {}

    async fn handle(&mut self, message: Self::Message, scope: &mut Scope<Self>, ctx: &Self::Context);

    async fn on_stop(&mut self, _scope: &mut Scope<Self>, _ctx: &Self::Context) {}
}
