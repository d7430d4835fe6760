use crate::fridge_actor::{FridgeError, StockLevel};
use crate::model::{OrderHistory, OrderId, OrderItem, Product, ProductId, Receipt};
use device_actor::Reply;
use tracing::{info, warn};

#[derive(Debug)]
pub enum FridgeMessage {
    GetContents {
        reply: Reply<FridgeContents>,
    },
    ConsumeProduct {
        product_id: ProductId,
        quantity: u32,
        reply: Reply<Result<String, FridgeError>>,
    },
    OrderProducts {
        items: Vec<OrderItem>,
        reply: Reply<Result<Receipt, FridgeError>>,
    },
    GetOrderHistory {
        reply: Reply<OrderHistory>,
    },
    /// Restock request raised by a consume crossing the low-stock threshold.
    AutoReorder { product: Product, quantity: u32 },
    /// Backend result re-entering the mailbox.
    OrderCompleted {
        receipt: Receipt,
        requester: OrderRequester,
    },
    /// Backend failure; the requester has already been answered.
    OrderFailed { order_id: OrderId, reason: String },
}

/// Snapshot returned by `GetContents`.
#[derive(Debug, Clone, PartialEq)]
pub struct FridgeContents {
    pub items: Vec<StockLevel>,
    pub total_weight_kg: f64,
    pub item_count: u32,
    pub max_weight_kg: f64,
    pub max_items: u32,
}

/// Who is waiting for an order's outcome.
#[derive(Debug)]
pub enum OrderRequester {
    Caller(Reply<Result<Receipt, FridgeError>>),
    /// Fire-and-forget: the outcome is only logged.
    AutoReorder { product: String },
}

impl OrderRequester {
    pub fn succeed(self, receipt: Receipt) {
        match self {
            Self::Caller(reply) => {
                let _ = reply.send(Ok(receipt));
            }
            Self::AutoReorder { product } => {
                info!(%product, order_id = %receipt.order_id, "Auto-reorder successful");
            }
        }
    }

    pub fn fail(self, error: FridgeError) {
        match self {
            Self::Caller(reply) => {
                let _ = reply.send(Err(error));
            }
            Self::AutoReorder { product } => {
                warn!(%product, error = %error, "Auto-reorder failed");
            }
        }
    }
}
