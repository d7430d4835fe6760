//! # Fridge Client
//!
//! High-level API for the fridge. Orders wait on the order backend, so they
//! get their own, longer timeout.

use crate::fridge_actor::{Fridge, FridgeContents, FridgeError, FridgeMessage};
use crate::model::{OrderHistory, OrderItem, ProductId, Receipt};
use async_trait::async_trait;
use device_actor::{DeviceClient, DeviceRef, FrameworkError};
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct FridgeClient {
    inner: DeviceRef<Fridge>,
    timeout: Duration,
    order_timeout: Duration,
}

impl FridgeClient {
    pub fn new(inner: DeviceRef<Fridge>, timeout: Duration, order_timeout: Duration) -> Self {
        Self {
            inner,
            timeout,
            order_timeout,
        }
    }

    #[instrument(skip(self))]
    pub async fn consume_product(&self, product_id: ProductId, quantity: u32) -> Result<String, FridgeError> {
        self.ask(move |reply| FridgeMessage::ConsumeProduct {
            product_id,
            quantity,
            reply,
        })
        .await?
    }

    /// Resolves once the backend has answered, or fails after the order timeout.
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    pub async fn order_products(&self, items: Vec<OrderItem>) -> Result<Receipt, FridgeError> {
        debug!("Submitting order");
        self.ask_within(|reply| FridgeMessage::OrderProducts { items, reply }, self.order_timeout)
            .await?
    }
}

#[async_trait]
impl DeviceClient<Fridge> for FridgeClient {
    type Error = FridgeError;

    fn inner(&self) -> &DeviceRef<Fridge> {
        &self.inner
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        FridgeError::Communication(e)
    }
}

crate::ask_methods!(FridgeClient, Fridge, FridgeMessage, FridgeError, [
    GetContents => FridgeContents,
    GetOrderHistory => OrderHistory,
]);
