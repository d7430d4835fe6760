//! # Device Addresses
//!
//! [`DeviceRef`] is the typed address of a running device. [`Recipient`] is a
//! type-erased address that accepts a single message type, used when a device
//! publishes to listeners it knows nothing else about.

use crate::entity::Device;
use crate::error::FrameworkError;
use crate::message::{Envelope, Reply};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Cloneable handle for sending messages to a [`DeviceActor`](crate::DeviceActor).
///
/// The mailbox is unbounded: [`tell`](DeviceRef::tell) never waits, which keeps
/// devices from blocking on each other and lets a device enqueue messages to
/// itself from inside a handler.
pub struct DeviceRef<T: Device> {
    sender: mpsc::UnboundedSender<Envelope<T::Message>>,
}

impl<T: Device> DeviceRef<T> {
    pub(crate) fn new(sender: mpsc::UnboundedSender<Envelope<T::Message>>) -> Self {
        Self { sender }
    }

    /// Fire-and-forget send.
    pub fn tell(&self, message: T::Message) -> Result<(), FrameworkError> {
        self.sender
            .send(Envelope::Message(message))
            .map_err(|_| FrameworkError::ActorClosed)
    }

    /// Request/response with a bounded wait.
    ///
    /// `build` receives the reply channel and returns the message to enqueue.
    /// If the timeout elapses first the caller gets [`FrameworkError::Timeout`];
    /// the message itself is not withdrawn and may still be processed.
    pub async fn ask<R, F>(&self, build: F, timeout: Duration) -> Result<R, FrameworkError>
    where
        R: Send,
        F: FnOnce(Reply<R>) -> T::Message + Send,
    {
        let (respond_to, response) = oneshot::channel();
        self.tell(build(respond_to))?;
        match tokio::time::timeout(timeout, response).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(_)) => Err(FrameworkError::ActorDropped),
            Err(_) => Err(FrameworkError::Timeout(timeout)),
        }
    }

    /// Asks the device to stop once every message already queued is handled.
    pub fn stop(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(Envelope::Stop)
            .map_err(|_| FrameworkError::ActorClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Adapts this address into a [`Recipient`] for another message type.
    pub fn recipient<M, F>(&self, adapt: F) -> Recipient<M>
    where
        M: 'static,
        F: Fn(M) -> T::Message + Send + Sync + 'static,
    {
        let target = self.clone();
        Recipient::new(move |message| target.tell(adapt(message)))
    }
}

impl<T: Device> Clone for DeviceRef<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Device> fmt::Debug for DeviceRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceRef")
            .field("device", &crate::actor::device_name::<T>())
            .field("closed", &self.is_closed())
            .finish()
    }
}

type Deliver<M> = dyn Fn(M) -> Result<(), FrameworkError> + Send + Sync;

/// Address that accepts `M` without exposing the concrete device behind it.
pub struct Recipient<M> {
    deliver: Arc<Deliver<M>>,
}

impl<M> Recipient<M> {
    pub fn new<F>(deliver: F) -> Self
    where
        F: Fn(M) -> Result<(), FrameworkError> + Send + Sync + 'static,
    {
        Self {
            deliver: Arc::new(deliver),
        }
    }

    pub fn tell(&self, message: M) -> Result<(), FrameworkError> {
        (self.deliver)(message)
    }
}

impl<M> Clone for Recipient<M> {
    fn clone(&self) -> Self {
        Self {
            deliver: Arc::clone(&self.deliver),
        }
    }
}

impl<M> fmt::Debug for Recipient<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Recipient")
    }
}
