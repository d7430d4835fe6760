//! # Mailbox Messages
//!
//! What actually travels through a device's mailbox.

use tokio::sync::oneshot;

/// One-shot reply channel carried by request messages (the ask pattern).
pub type Reply<T> = oneshot::Sender<T>;

/// Wrapper around a device's own messages.
///
/// `Stop` is a runtime instruction rather than a device message, so devices
/// never have to model it themselves. It is ordered with every other message:
/// anything enqueued before it is still handled.
#[derive(Debug)]
pub enum Envelope<M> {
    Message(M),
    Stop,
}
