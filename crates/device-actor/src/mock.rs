//! # Probes for Testing
//!
//! A probe is an address with no device behind it: the test holds the mailbox
//! and inspects whatever the device under test sends.
//!
//! ```rust,ignore
//! let (blinds, mut blinds_probe) = create_probe::<Blinds>();
//! tokio::spawn(media_actor.run(blinds));
//!
//! media_client.play_movie("Alien".into()).await?;
//! assert!(matches!(
//!     blinds_probe.expect_message().await,
//!     Some(BlindsMessage::MovieStateChange(true))
//! ));
//! ```

use crate::client::{DeviceRef, Recipient};
use crate::entity::Device;
use crate::message::Envelope;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long [`Probe::expect_message`] waits before giving up.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Receiving end of a probe address.
pub struct Probe<M> {
    receiver: mpsc::UnboundedReceiver<Envelope<M>>,
}

/// Creates a [`DeviceRef`] for `T` whose mailbox is read by the test.
pub fn create_probe<T: Device>() -> (DeviceRef<T>, Probe<T::Message>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (DeviceRef::new(sender), Probe { receiver })
}

/// Creates a [`Recipient`] whose deliveries are read by the test.
pub fn create_recipient_probe<M: Send + 'static>() -> (Recipient<M>, Probe<M>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let recipient = Recipient::new(move |message| {
        sender
            .send(Envelope::Message(message))
            .map_err(|_| crate::FrameworkError::ActorClosed)
    });
    (recipient, Probe { receiver })
}

impl<M> Probe<M> {
    /// Waits up to [`PROBE_TIMEOUT`] for the next message.
    ///
    /// Returns `None` on timeout, on a stop request or once every sender is gone.
    pub async fn expect_message(&mut self) -> Option<M> {
        self.expect_message_within(PROBE_TIMEOUT).await
    }

    /// Like [`expect_message`](Probe::expect_message) with a custom wait, for
    /// messages produced by slower timers.
    pub async fn expect_message_within(&mut self, wait: Duration) -> Option<M> {
        match tokio::time::timeout(wait, self.receiver.recv()).await {
            Ok(Some(Envelope::Message(message))) => Some(message),
            _ => None,
        }
    }

    /// Returns the next message if one is already queued.
    pub fn try_message(&mut self) -> Option<M> {
        match self.receiver.try_recv() {
            Ok(Envelope::Message(message)) => Some(message),
            _ => None,
        }
    }

    /// Waits up to [`PROBE_TIMEOUT`] for a stop request.
    pub async fn expect_stop(&mut self) -> bool {
        matches!(
            tokio::time::timeout(PROBE_TIMEOUT, self.receiver.recv()).await,
            Ok(Some(Envelope::Stop))
        )
    }

    /// Drains everything queued right now.
    pub fn drain(&mut self) -> Vec<M> {
        let mut messages = Vec::new();
        while let Some(message) = self.try_message() {
            messages.push(message);
        }
        messages
    }

    /// Asserts that nothing is queued.
    ///
    /// # Panics
    ///
    /// Panics with the queued message if there is one.
    pub fn expect_no_message(&mut self)
    where
        M: std::fmt::Debug,
    {
        if let Ok(envelope) = self.receiver.try_recv() {
            panic!("Expected an empty mailbox, found {envelope:?}");
        }
    }
}
