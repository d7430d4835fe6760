//! # Order Backend Port
//!
//! The fridge talks to order fulfilment through [`OrderBackend`]. The real
//! transport lives outside this crate; [`LocalOrderProcessor`] is the
//! in-process implementation used by the demo binary and the tests.

pub mod local;
pub mod wire;

pub use local::LocalOrderProcessor;
pub use wire::{OrderRequest, ReceiptResponse, WireOrderItem, WireProduct};

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("order backend unavailable: {0}")]
    Unavailable(String),
    #[error("order rejected by backend: {0}")]
    Rejected(String),
    #[error("invalid backend response: {0}")]
    InvalidResponse(String),
}

/// Asynchronous order processing.
///
/// Implementations may take arbitrarily long; callers inside a device must
/// never await this on the device loop (see `Scope::pipe_to_self`).
#[async_trait]
pub trait OrderBackend: Send + Sync {
    async fn process_order(&self, request: OrderRequest) -> Result<ReceiptResponse, BackendError>;
}
