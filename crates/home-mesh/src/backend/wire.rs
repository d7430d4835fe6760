//! Request/response shapes of the order RPC.
//!
//! Prices travel as decimal strings, timestamps as RFC 3339.

use crate::backend::BackendError;
use crate::model::{Order, OrderId, OrderItem, Price, Product, ProductId, Receipt};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProduct {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOrderItem {
    pub product: WireProduct,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_id: String,
    pub timestamp: DateTime<Utc>,
    pub items: Vec<WireOrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub order_id: String,
    pub timestamp: DateTime<Utc>,
    pub items: Vec<WireOrderItem>,
    pub total_price: Price,
}

impl From<&OrderItem> for WireOrderItem {
    fn from(item: &OrderItem) -> Self {
        let product = item.product();
        Self {
            product: WireProduct {
                id: product.id.to_string(),
                name: product.name.clone(),
                price: product.price,
                weight: product.weight_kg,
            },
            quantity: item.quantity(),
        }
    }
}

impl TryFrom<WireOrderItem> for OrderItem {
    type Error = BackendError;

    fn try_from(item: WireOrderItem) -> Result<Self, Self::Error> {
        let product = Product::with_id(
            ProductId::new(item.product.id),
            item.product.name,
            item.product.price,
            item.product.weight,
        );
        if !product.has_valid_weight() {
            return Err(BackendError::InvalidResponse(format!(
                "invalid weight {} for {}",
                product.weight_kg, product.name
            )));
        }
        OrderItem::new(product, item.quantity)
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

impl From<&Order> for OrderRequest {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id().to_string(),
            timestamp: order.created_at(),
            items: order.items().iter().map(WireOrderItem::from).collect(),
        }
    }
}

impl ReceiptResponse {
    /// Converts into the domain receipt, rejecting items with zero quantity.
    pub fn into_receipt(self) -> Result<Receipt, BackendError> {
        let items = self
            .items
            .into_iter()
            .map(OrderItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Receipt {
            order_id: OrderId::new(self.order_id),
            timestamp: self.timestamp,
            items,
            total_price: self.total_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_json_shape() {
        let milk = Product::with_id(ProductId::new("milk"), "Milk", Price::from_cents(199), 1.0);
        let order = Order::new(vec![OrderItem::new(milk, 3).unwrap()]);
        let json = serde_json::to_value(OrderRequest::from(&order)).unwrap();

        assert_eq!(json["orderId"], order.id().as_str());
        assert_eq!(json["items"][0]["product"]["id"], "milk");
        assert_eq!(json["items"][0]["product"]["price"], "1.99");
        assert_eq!(json["items"][0]["quantity"], 3);
        assert!(json["timestamp"].as_str().is_some());
    }

    #[test]
    fn test_receipt_response_rejects_negative_weight() {
        let response: ReceiptResponse = serde_json::from_str(
            r#"{
                "orderId": "o-1",
                "timestamp": "2024-05-01T10:00:00Z",
                "items": [{"product": {"id": "bread", "name": "Bread", "price": "2.50", "weight": -1.0}, "quantity": 2}],
                "totalPrice": "6.99"
            }"#,
        )
        .unwrap();

        assert!(matches!(
            response.into_receipt(),
            Err(BackendError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_receipt_response_rejects_zero_quantity() {
        let response: ReceiptResponse = serde_json::from_str(
            r#"{
                "orderId": "o-1",
                "timestamp": "2024-05-01T10:00:00Z",
                "items": [{"product": {"id": "bread", "name": "Bread", "price": "2.50", "weight": 1.0}, "quantity": 0}],
                "totalPrice": "1.99"
            }"#,
        )
        .unwrap();

        assert!(matches!(
            response.into_receipt(),
            Err(BackendError::InvalidResponse(_))
        ));
    }
}
