//! # Device Runtime
//!
//! [`DeviceActor`] is the "server" half of a device: it owns the state and the
//! receiving end of the mailbox and drives the [`Device`] hooks.

use crate::client::DeviceRef;
use crate::entity::Device;
use crate::message::Envelope;
use crate::scope::Scope;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Runs one device.
///
/// # Usage Pattern
///
/// 1. **Create**: [`DeviceActor::new`] returns the actor and its first address.
/// 2. **Wire**: clone addresses into other devices' contexts.
/// 3. **Run**: spawn `actor.run(context)` on the Tokio runtime.
///
/// **Concurrency model**: every message is handled to completion before the
/// next one is taken from the mailbox, so the device sees a strictly sequential
/// history even though many devices run in parallel.
pub struct DeviceActor<T: Device> {
    device: T,
    receiver: mpsc::UnboundedReceiver<Envelope<T::Message>>,
    mailbox: mpsc::WeakUnboundedSender<Envelope<T::Message>>,
}

impl<T: Device> DeviceActor<T> {
    /// Creates the actor around `device` together with an address to it.
    pub fn new(device: T) -> (Self, DeviceRef<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = Self {
            device,
            receiver,
            mailbox: sender.downgrade(),
        };
        (actor, DeviceRef::new(sender))
    }

    /// Runs the event loop until a stop request arrives or every address is
    /// dropped.
    ///
    /// # Context Injection
    /// `context` is passed to every hook. It is supplied here rather than in
    /// [`new`](DeviceActor::new) so addresses can be created before the
    /// dependencies that need them.
    pub async fn run(mut self, context: T::Context) {
        let device = device_name::<T>();
        let mut scope = Scope::new(self.mailbox.clone());

        self.device.on_start(&mut scope, &context).await;
        info!(device, "Device started");

        while let Some(envelope) = self.receiver.recv().await {
            match envelope {
                Envelope::Message(message) => {
                    debug!(device, ?message, "Message");
                    self.device.handle(message, &mut scope, &context).await;
                }
                Envelope::Stop => {
                    debug!(device, "Stop requested");
                    break;
                }
            }
        }

        self.device.on_stop(&mut scope, &context).await;
        scope.timers().cancel_all();
        info!(device, "Device stopped");
    }
}

/// Short type name, e.g. `Fridge` instead of `home_mesh::fridge_actor::entity::Fridge`.
pub(crate) fn device_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
