use crate::backend::{BackendError, OrderBackend, OrderRequest, ReceiptResponse};
use crate::model::Price;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{info, instrument};

/// In-process order processor: echoes the items and charges a flat fee.
#[derive(Debug, Clone)]
pub struct LocalOrderProcessor {
    processing_fee: Price,
    latency: Duration,
}

impl LocalOrderProcessor {
    pub const DEFAULT_FEE: Price = Price::from_cents(199);

    pub fn new(processing_fee: Price, latency: Duration) -> Self {
        Self {
            processing_fee,
            latency,
        }
    }
}

impl Default for LocalOrderProcessor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FEE, Duration::ZERO)
    }
}

#[async_trait]
impl OrderBackend for LocalOrderProcessor {
    #[instrument(skip(self, request), fields(order_id = %request.order_id))]
    async fn process_order(&self, request: OrderRequest) -> Result<ReceiptResponse, BackendError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if request.items.is_empty() {
            return Err(BackendError::Rejected("order has no items".to_string()));
        }

        let total_price = request
            .items
            .iter()
            .map(|item| item.product.price.times(item.quantity))
            .sum::<Price>()
            + self.processing_fee;
        info!(%total_price, "Order processed");

        Ok(ReceiptResponse {
            order_id: request.order_id,
            timestamp: Utc::now(),
            items: request.items,
            total_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{WireOrderItem, WireProduct};

    fn item(id: &str, price: &str, quantity: u32) -> WireOrderItem {
        WireOrderItem {
            product: WireProduct {
                id: id.to_string(),
                name: id.to_string(),
                price: price.parse().unwrap(),
                weight: 1.0,
            },
            quantity,
        }
    }

    #[tokio::test]
    async fn test_total_includes_processing_fee() {
        let processor = LocalOrderProcessor::default();
        let request = OrderRequest {
            order_id: "o-1".to_string(),
            timestamp: Utc::now(),
            items: vec![item("milk", "1.99", 3), item("bread", "2.50", 1)],
        };

        let receipt = processor.process_order(request.clone()).await.unwrap();
        assert_eq!(receipt.order_id, "o-1");
        assert_eq!(receipt.items, request.items);
        assert_eq!(receipt.total_price, Price::from_cents(1046));
    }

    #[tokio::test]
    async fn test_empty_order_is_rejected() {
        let processor = LocalOrderProcessor::default();
        let request = OrderRequest {
            order_id: "o-2".to_string(),
            timestamp: Utc::now(),
            items: Vec::new(),
        };
        assert!(matches!(
            processor.process_order(request).await,
            Err(BackendError::Rejected(_))
        ));
    }
}
