//! # Device Scope
//!
//! Per-device runtime handle passed to every hook.

use crate::client::DeviceRef;
use crate::entity::Device;
use crate::message::Envelope;
use crate::timer::TimerScheduler;
use std::future::Future;
use tokio::sync::mpsc;
use tracing::warn;

/// Access to the running device's own address, timers and background work.
///
/// The scope only holds a weak reference to the mailbox, so a device does not
/// keep itself alive: once every external [`DeviceRef`] is gone the loop ends.
pub struct Scope<T: Device> {
    mailbox: mpsc::WeakUnboundedSender<Envelope<T::Message>>,
    timers: TimerScheduler<T::Message>,
}

impl<T: Device> Scope<T> {
    pub(crate) fn new(mailbox: mpsc::WeakUnboundedSender<Envelope<T::Message>>) -> Self {
        let timers = TimerScheduler::new(mailbox.clone());
        Self { mailbox, timers }
    }

    /// The device's own address, if anyone else still holds one.
    pub fn myself(&self) -> Option<DeviceRef<T>> {
        self.mailbox.upgrade().map(DeviceRef::new)
    }

    pub fn timers(&mut self) -> &mut TimerScheduler<T::Message> {
        &mut self.timers
    }

    /// Enqueues a message to this device, handled after the current one.
    pub fn tell_self(&self, message: T::Message) {
        match self.mailbox.upgrade() {
            Some(sender) => {
                if sender.send(Envelope::Message(message)).is_err() {
                    warn!("Self message dropped, mailbox closed");
                }
            }
            None => warn!("Self message dropped, mailbox closed"),
        }
    }

    /// Runs `future` off the device loop and feeds its output back into the
    /// mailbox.
    ///
    /// This is how a device issues an outbound asynchronous call: the state
    /// change the result triggers stays serialized with every other message,
    /// instead of racing with the loop from a callback.
    pub fn pipe_to_self<F>(&self, future: F)
    where
        F: Future<Output = T::Message> + Send + 'static,
    {
        let mailbox = self.mailbox.clone();
        tokio::spawn(async move {
            let message = future.await;
            let delivered = mailbox
                .upgrade()
                .is_some_and(|sender| sender.send(Envelope::Message(message)).is_ok());
            if !delivered {
                warn!("Background result dropped, mailbox closed");
            }
        });
    }
}
