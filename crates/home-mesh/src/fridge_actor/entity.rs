use crate::backend::{OrderBackend, OrderRequest};
use crate::fridge_actor::{FridgeContents, FridgeError, FridgeMessage, Inventory, OrderRequester};
use crate::model::{Order, OrderHistory, OrderId, OrderItem, OrderRecord, OrderStatus, ProductId, Receipt};
use async_trait::async_trait;
use device_actor::{Device, Scope};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Capacity limits and restocking policy.
#[derive(Debug, Clone, PartialEq)]
pub struct FridgeConfig {
    pub max_weight_kg: f64,
    pub max_items: u32,
    /// A consume leaving this many units or fewer triggers a reorder.
    pub reorder_threshold: u32,
    pub reorder_quantity: u32,
}

impl Default for FridgeConfig {
    fn default() -> Self {
        Self {
            max_weight_kg: 30.0,
            max_items: 50,
            reorder_threshold: 1,
            reorder_quantity: 3,
        }
    }
}

/// Smart fridge with capacity limits, order history and auto-reorder.
///
/// Orders are validated against the current contents and handed to the
/// [`OrderBackend`] off the device loop. The outcome comes back through the
/// mailbox, so contents, receipts and history only change inside `handle`.
/// The context is the backend.
pub struct Fridge {
    config: FridgeConfig,
    inventory: Inventory,
    orders: Vec<OrderRecord>,
    receipts: Vec<Receipt>,
}

impl Fridge {
    pub fn new(config: FridgeConfig, inventory: Inventory) -> Self {
        Self {
            config,
            inventory,
            orders: Vec::new(),
            receipts: Vec::new(),
        }
    }

    fn contents(&self) -> FridgeContents {
        FridgeContents {
            items: self.inventory.levels(),
            total_weight_kg: self.inventory.total_weight(),
            item_count: self.inventory.item_count(),
            max_weight_kg: self.config.max_weight_kg,
            max_items: self.config.max_items,
        }
    }

    fn history(&self) -> OrderHistory {
        OrderHistory {
            orders: self.orders.clone(),
            receipts: self.receipts.clone(),
        }
    }

    /// Restock when the consume empties the product or crosses the threshold.
    fn needs_reorder(&self, before: u32, remaining: u32) -> bool {
        let threshold = self.config.reorder_threshold;
        remaining == 0 || (before > threshold && remaining <= threshold)
    }

    fn consume(&mut self, id: &ProductId, quantity: u32, scope: &Scope<Self>) -> Result<String, FridgeError> {
        let taken = self.inventory.take(id, quantity)?;
        info!(product = %taken.product.name, quantity, remaining = taken.remaining, "Consumed product");

        if self.needs_reorder(taken.before, taken.remaining) {
            scope.tell_self(FridgeMessage::AutoReorder {
                product: taken.product.clone(),
                quantity: self.config.reorder_quantity,
            });
        }
        Ok(format!("Consumed {quantity} x {}", taken.product.name))
    }

    /// Weights must be finite and non-negative. Then weight, then count, both
    /// against current contents.
    fn check_capacity(&self, items: &[OrderItem]) -> Result<(), FridgeError> {
        if let Some(item) = items.iter().find(|item| !item.product().has_valid_weight()) {
            return Err(FridgeError::InvalidWeight {
                product: item.product().name.clone(),
                weight: item.product().weight_kg,
            });
        }

        let current = self.inventory.total_weight();
        let requested: f64 = items.iter().map(OrderItem::total_weight).sum();
        if current + requested > self.config.max_weight_kg {
            return Err(FridgeError::TooHeavy {
                current,
                requested,
                max: self.config.max_weight_kg,
            });
        }

        // u64 cannot overflow: at most `items.len()` addends of u32::MAX.
        let current = self.inventory.item_count();
        let requested: u64 = items.iter().map(|item| u64::from(item.quantity())).sum();
        if u64::from(current) + requested > u64::from(self.config.max_items) {
            return Err(FridgeError::NotEnoughSpace {
                current,
                requested,
                max: self.config.max_items,
            });
        }
        Ok(())
    }

    fn submit_order(
        &mut self,
        items: Vec<OrderItem>,
        requester: OrderRequester,
        scope: &Scope<Self>,
        backend: &Arc<dyn OrderBackend>,
    ) {
        if items.is_empty() {
            requester.fail(FridgeError::EmptyOrder);
            return;
        }
        if let Err(e) = self.check_capacity(&items) {
            warn!(error = %e, "Order rejected");
            requester.fail(e);
            return;
        }

        let order = Order::new(items);
        let order_id = order.id().clone();
        let request = OrderRequest::from(&order);
        info!(%order_id, total_price = %order.total_price(), "Order validated, sending to order backend");
        self.orders.push(OrderRecord {
            order,
            status: OrderStatus::Submitted,
        });

        let backend = Arc::clone(backend);
        scope.pipe_to_self(async move {
            let outcome = match backend.process_order(request).await {
                Ok(response) => response.into_receipt(),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(receipt) => FridgeMessage::OrderCompleted { receipt, requester },
                Err(e) => {
                    let reason = e.to_string();
                    requester.fail(e.into());
                    FridgeMessage::OrderFailed { order_id, reason }
                }
            }
        });
    }

    fn set_status(&mut self, order_id: &OrderId, status: OrderStatus) {
        match self.orders.iter_mut().find(|r| r.order.id() == order_id) {
            Some(record) => record.status = status,
            None => warn!(%order_id, "Outcome for unknown order"),
        }
    }

    fn complete_order(&mut self, receipt: Receipt, requester: OrderRequester) {
        for item in &receipt.items {
            self.inventory.add(item.product().clone(), item.quantity());
        }
        self.set_status(&receipt.order_id, OrderStatus::Completed);
        info!(order_id = %receipt.order_id, total_price = %receipt.total_price, "Order processed successfully");
        self.receipts.push(receipt.clone());
        requester.succeed(receipt);
    }
}

#[async_trait]
impl Device for Fridge {
    type Message = FridgeMessage;
    type Context = Arc<dyn OrderBackend>;

    async fn on_start(&mut self, _scope: &mut Scope<Self>, _backend: &Arc<dyn OrderBackend>) {
        debug!(
            items = self.inventory.item_count(),
            weight_kg = self.inventory.total_weight(),
            "Fridge stocked"
        );
    }

    async fn handle(&mut self, message: FridgeMessage, scope: &mut Scope<Self>, backend: &Arc<dyn OrderBackend>) {
        match message {
            FridgeMessage::GetContents { reply } => {
                let _ = reply.send(self.contents());
            }
            FridgeMessage::ConsumeProduct {
                product_id,
                quantity,
                reply,
            } => {
                let result = self.consume(&product_id, quantity, scope);
                if let Err(e) = &result {
                    info!(%product_id, quantity, error = %e, "Consume rejected");
                }
                let _ = reply.send(result);
            }
            FridgeMessage::OrderProducts { items, reply } => {
                self.submit_order(items, OrderRequester::Caller(reply), scope, backend);
            }
            FridgeMessage::GetOrderHistory { reply } => {
                let _ = reply.send(self.history());
            }
            FridgeMessage::AutoReorder { product, quantity } => {
                info!(product = %product.name, quantity, "Auto-reordering");
                let requester = OrderRequester::AutoReorder {
                    product: product.name.clone(),
                };
                match OrderItem::new(product, quantity) {
                    Ok(item) => self.submit_order(vec![item], requester, scope, backend),
                    Err(e) => requester.fail(e.into()),
                }
            }
            FridgeMessage::OrderCompleted { receipt, requester } => {
                self.complete_order(receipt, requester);
            }
            FridgeMessage::OrderFailed { order_id, reason } => {
                warn!(%order_id, %reason, "Order failed");
                self.set_status(&order_id, OrderStatus::Failed(reason));
            }
        }
    }
}
