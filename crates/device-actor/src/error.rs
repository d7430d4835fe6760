//! # Framework Errors
//!
//! Transport-level failures shared by every device and client.

use std::time::Duration;

/// Errors that can occur while talking to a device.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Device mailbox closed")]
    ActorClosed,
    #[error("Device dropped reply channel")]
    ActorDropped,
    #[error("No reply within {0:?}")]
    Timeout(Duration),
}
