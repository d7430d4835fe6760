//! Orders placed by the fridge and receipts returned by the order backend.
use crate::model::{OrderItem, Price};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An accepted order. Totals are derived from the items, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    created_at: DateTime<Utc>,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self {
            id: OrderId::generate(),
            created_at: Utc::now(),
            items,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total_price(&self) -> Price {
        self.items.iter().map(OrderItem::total_price).sum()
    }

    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(OrderItem::total_weight).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(OrderItem::quantity).sum()
    }
}

/// What the backend actually fulfilled. Authoritative for restocking.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub order_id: OrderId,
    pub timestamp: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub total_price: Price,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    /// Sent to the backend, no outcome yet.
    Submitted,
    Completed,
    Failed(String),
}

/// An order history entry: the attempt plus its reconciled outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order: Order,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderHistory {
    pub orders: Vec<OrderRecord>,
    pub receipts: Vec<Receipt>,
}
