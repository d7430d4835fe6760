use async_trait::async_trait;
use home_mesh::backend::{
    BackendError, LocalOrderProcessor, OrderBackend, OrderRequest, ReceiptResponse,
};
use home_mesh::clients::FridgeClient;
use home_mesh::fridge_actor::{FridgeConfig, FridgeError, FridgeMessage, Inventory};
use home_mesh::model::{OrderHistory, OrderItem, OrderStatus, Price, Product, ProductId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Always unreachable.
struct FailingBackend;

#[async_trait]
impl OrderBackend for FailingBackend {
    async fn process_order(&self, _request: OrderRequest) -> Result<ReceiptResponse, BackendError> {
        Err(BackendError::Unavailable("connection refused".to_string()))
    }
}

/// Fulfils at most two units of every line.
struct ShortBackend;

#[async_trait]
impl OrderBackend for ShortBackend {
    async fn process_order(&self, mut request: OrderRequest) -> Result<ReceiptResponse, BackendError> {
        for item in &mut request.items {
            item.quantity = item.quantity.min(2);
        }
        LocalOrderProcessor::default().process_order(request).await
    }
}

/// Local processor that counts requests.
#[derive(Default)]
struct CountingBackend {
    requests: AtomicUsize,
}

#[async_trait]
impl OrderBackend for CountingBackend {
    async fn process_order(&self, request: OrderRequest) -> Result<ReceiptResponse, BackendError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        LocalOrderProcessor::default().process_order(request).await
    }
}

fn spawn_fridge(
    inventory: Inventory,
    backend: Arc<dyn OrderBackend>,
) -> (FridgeClient, JoinHandle<()>) {
    let (actor, address) = home_mesh::fridge_actor::new(FridgeConfig::default(), inventory);
    let handle = tokio::spawn(actor.run(backend));
    let client = FridgeClient::new(address, Duration::from_secs(1), Duration::from_secs(5));
    (client, handle)
}

async fn shutdown(client: FridgeClient, handle: JoinHandle<()>) {
    use device_actor::DeviceClient;
    client.inner().stop().unwrap();
    handle.await.unwrap();
}

/// Polls the order history until `done` holds.
async fn history_when(client: &FridgeClient, done: impl Fn(&OrderHistory) -> bool) -> OrderHistory {
    for _ in 0..100 {
        let history = client.get_order_history().await.unwrap();
        if done(&history) {
            return history;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("order history never reached the expected state");
}

fn bread() -> Product {
    Product::with_id(ProductId::new("bread"), "Bread", Price::from_cents(250), 1.0)
}

#[tokio::test(start_paused = true)]
async fn test_consuming_last_milk_removes_it_and_reorders_three() {
    let backend = Arc::new(LocalOrderProcessor::new(
        LocalOrderProcessor::DEFAULT_FEE,
        Duration::from_secs(1),
    ));
    let (fridge, handle) = spawn_fridge(Inventory::kitchen_defaults(), backend);
    let milk = ProductId::new("milk");

    let message = fridge.consume_product(milk.clone(), 2).await.unwrap();
    assert_eq!(message, "Consumed 2 x Milk");

    // The backend is still working on the reorder.
    let contents = fridge.get_contents().await.unwrap();
    assert!(contents.items.iter().all(|level| level.product.id != milk));
    let history = fridge.get_order_history().await.unwrap();
    assert_eq!(history.orders.len(), 1);
    assert_eq!(history.orders[0].status, OrderStatus::Submitted);
    assert_eq!(history.orders[0].order.items()[0].product().id, milk);
    assert_eq!(history.orders[0].order.items()[0].quantity(), 3);
    assert!(history.receipts.is_empty());

    tokio::time::sleep(Duration::from_secs(2)).await;

    let history = fridge.get_order_history().await.unwrap();
    assert_eq!(history.orders[0].status, OrderStatus::Completed);
    assert_eq!(history.receipts.len(), 1);
    // 3 x 1.99 + 1.99 fee
    assert_eq!(history.receipts[0].total_price, Price::from_cents(796));
    let contents = fridge.get_contents().await.unwrap();
    let restocked = contents.items.iter().find(|level| level.product.id == milk).unwrap();
    assert_eq!(restocked.quantity, 3);

    shutdown(fridge, handle).await;
}

#[tokio::test]
async fn test_consume_rejections_leave_stock_unchanged() {
    let (fridge, handle) = spawn_fridge(Inventory::kitchen_defaults(), Arc::new(LocalOrderProcessor::default()));

    let err = fridge.consume_product(ProductId::new("milk"), 5).await.unwrap_err();
    assert_eq!(err.to_string(), "Not enough Milk in fridge. Available: 2");
    assert!(matches!(
        fridge.consume_product(ProductId::new("caviar"), 1).await,
        Err(FridgeError::ProductNotFound(_))
    ));
    assert!(matches!(
        fridge.consume_product(ProductId::new("milk"), 0).await,
        Err(FridgeError::InvalidQuantity(_))
    ));

    let contents = fridge.get_contents().await.unwrap();
    assert_eq!(contents.item_count, 18);
    assert!(fridge.get_order_history().await.unwrap().orders.is_empty());

    shutdown(fridge, handle).await;
}

#[tokio::test(start_paused = true)]
async fn test_bread_order_is_recorded_immediately_and_credited_on_receipt() {
    let mut inventory = Inventory::default();
    let water = Product::with_id(ProductId::new("water"), "Water", Price::from_cents(50), 1.0);
    inventory.add(water, 10);
    let backend = Arc::new(LocalOrderProcessor::new(
        LocalOrderProcessor::DEFAULT_FEE,
        Duration::from_secs(1),
    ));
    let (fridge, handle) = spawn_fridge(inventory, backend);

    let (reply, receipt) = tokio::sync::oneshot::channel();
    {
        use device_actor::DeviceClient;
        fridge
            .tell(FridgeMessage::OrderProducts {
                items: vec![OrderItem::new(bread(), 5).unwrap()],
                reply,
            })
            .unwrap();
    }

    let history = fridge.get_order_history().await.unwrap();
    assert_eq!(history.orders.len(), 1);
    assert_eq!(history.orders[0].status, OrderStatus::Submitted);
    assert!(history.receipts.is_empty());

    let receipt = receipt.await.unwrap().unwrap();
    // 5 x 2.50 + 1.99 fee
    assert_eq!(receipt.total_price, Price::from_cents(1449));
    assert_eq!(receipt.order_id, *history.orders[0].order.id());

    let contents = fridge.get_contents().await.unwrap();
    assert!((contents.total_weight_kg - 15.0).abs() < 1e-9);
    assert_eq!(contents.item_count, 15);
    let history = fridge.get_order_history().await.unwrap();
    assert_eq!(history.orders[0].status, OrderStatus::Completed);
    assert_eq!(history.receipts, vec![receipt]);

    shutdown(fridge, handle).await;
}

#[tokio::test]
async fn test_orders_over_capacity_are_rejected_without_history() {
    let (fridge, handle) = spawn_fridge(Inventory::kitchen_defaults(), Arc::new(LocalOrderProcessor::default()));

    let heavy = fridge
        .order_products(vec![OrderItem::new(bread(), 25).unwrap()])
        .await
        .unwrap_err();
    assert!(matches!(heavy, FridgeError::TooHeavy { .. }));

    let feather = Product::new("Feather", Price::from_cents(1), 0.01);
    let crowded = fridge
        .order_products(vec![OrderItem::new(feather, 40).unwrap()])
        .await
        .unwrap_err();
    assert_eq!(
        crowded.to_string(),
        "Not enough space. Current: 18 items, Order: 40 items, Max: 50 items"
    );

    assert!(matches!(
        fridge.order_products(Vec::new()).await,
        Err(FridgeError::EmptyOrder)
    ));

    let contents = fridge.get_contents().await.unwrap();
    assert_eq!(contents.item_count, 18);
    assert!(fridge.get_order_history().await.unwrap().orders.is_empty());

    shutdown(fridge, handle).await;
}

#[tokio::test]
async fn test_backend_failure_replies_error_and_marks_order_failed() {
    let (fridge, handle) = spawn_fridge(Inventory::kitchen_defaults(), Arc::new(FailingBackend));

    let err = fridge
        .order_products(vec![OrderItem::new(bread(), 1).unwrap()])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FridgeError::Backend(BackendError::Unavailable(_))
    ));

    let history = history_when(&fridge, |h| {
        h.orders.len() == 1 && h.orders[0].status != OrderStatus::Submitted
    })
    .await;
    assert!(matches!(&history.orders[0].status, OrderStatus::Failed(reason) if reason.contains("connection refused")));
    assert!(history.receipts.is_empty());
    assert_eq!(fridge.get_contents().await.unwrap().item_count, 18);

    shutdown(fridge, handle).await;
}

#[tokio::test]
async fn test_failed_auto_reorder_is_only_recorded() {
    let (fridge, handle) = spawn_fridge(Inventory::kitchen_defaults(), Arc::new(FailingBackend));

    let consumed = fridge.consume_product(ProductId::new("cheese"), 1).await;
    assert_eq!(consumed.unwrap(), "Consumed 1 x Cheese");

    let history = history_when(&fridge, |h| {
        h.orders.len() == 1 && matches!(h.orders[0].status, OrderStatus::Failed(_))
    })
    .await;
    assert_eq!(history.orders[0].order.items()[0].quantity(), 3);

    shutdown(fridge, handle).await;
}

#[tokio::test]
async fn test_receipt_decides_what_is_restocked() {
    let (fridge, handle) = spawn_fridge(Inventory::default(), Arc::new(ShortBackend));

    let receipt = fridge
        .order_products(vec![OrderItem::new(bread(), 5).unwrap()])
        .await
        .unwrap();
    assert_eq!(receipt.items[0].quantity(), 2);

    let contents = fridge.get_contents().await.unwrap();
    assert_eq!(contents.item_count, 2);

    shutdown(fridge, handle).await;
}

#[tokio::test]
async fn test_auto_reorder_fires_once_per_crossing() {
    let backend = Arc::new(CountingBackend::default());
    let (fridge, handle) = spawn_fridge(Inventory::kitchen_defaults(), backend.clone());
    let eggs = ProductId::new("eggs");

    // 10 -> 5 -> 2: still above the threshold.
    fridge.consume_product(eggs.clone(), 5).await.unwrap();
    fridge.consume_product(eggs.clone(), 3).await.unwrap();
    assert!(fridge.get_order_history().await.unwrap().orders.is_empty());

    // 2 -> 1 crosses it.
    fridge.consume_product(eggs.clone(), 1).await.unwrap();
    history_when(&fridge, |h| h.receipts.len() == 1).await;
    assert_eq!(backend.requests.load(Ordering::SeqCst), 1);

    // 1 + 3 restocked -> 3 stays above, -> 0 empties.
    fridge.consume_product(eggs.clone(), 1).await.unwrap();
    fridge.consume_product(eggs.clone(), 3).await.unwrap();
    let history = history_when(&fridge, |h| h.receipts.len() == 2).await;
    assert_eq!(history.orders.len(), 2);
    assert_eq!(backend.requests.load(Ordering::SeqCst), 2);

    shutdown(fridge, handle).await;
}

#[tokio::test]
async fn test_overflowing_quantity_is_rejected_and_fridge_keeps_running() {
    let (fridge, handle) = spawn_fridge(Inventory::kitchen_defaults(), Arc::new(LocalOrderProcessor::default()));
    let air = Product::new("Air", Price::from_cents(1), 0.0);

    let err = fridge
        .order_products(vec![OrderItem::new(air, u32::MAX).unwrap()])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FridgeError::NotEnoughSpace { current: 18, requested, max: 50 } if requested == u64::from(u32::MAX)
    ));

    let contents = fridge.get_contents().await.unwrap();
    assert_eq!(contents.item_count, 18);
    assert!(fridge.get_order_history().await.unwrap().orders.is_empty());

    shutdown(fridge, handle).await;
}

#[tokio::test]
async fn test_orders_with_invalid_weight_are_rejected() {
    let (fridge, handle) = spawn_fridge(Inventory::kitchen_defaults(), Arc::new(LocalOrderProcessor::default()));

    for (weight, quantity) in [(f64::NAN, 5), (-100.0, 1), (f64::INFINITY, 1)] {
        let odd = Product::new("Odd", Price::from_cents(100), weight);
        let result = fridge
            .order_products(vec![OrderItem::new(odd, quantity).unwrap()])
            .await;
        assert!(matches!(result, Err(FridgeError::InvalidWeight { .. })), "{weight} accepted");
    }

    let contents = fridge.get_contents().await.unwrap();
    assert_eq!(contents.item_count, 18);
    assert!((contents.total_weight_kg - 8.3).abs() < 1e-9);
    assert!(fridge.get_order_history().await.unwrap().orders.is_empty());

    // The weight limit still applies afterwards.
    let heavy = fridge
        .order_products(vec![OrderItem::new(bread(), 25).unwrap()])
        .await;
    assert!(matches!(heavy, Err(FridgeError::TooHeavy { .. })));

    shutdown(fridge, handle).await;
}

#[tokio::test]
async fn test_order_filling_the_fridge_exactly_is_accepted() {
    let (fridge, handle) = spawn_fridge(Inventory::default(), Arc::new(LocalOrderProcessor::default()));
    let pebble = Product::new("Pebble", Price::from_cents(1), 0.0);

    // 30 x 1.0 kg + 20 x 0.0 kg: exactly 30 kg and 50 items.
    fridge
        .order_products(vec![
            OrderItem::new(bread(), 30).unwrap(),
            OrderItem::new(pebble.clone(), 20).unwrap(),
        ])
        .await
        .unwrap();
    let contents = fridge.get_contents().await.unwrap();
    assert_eq!(contents.item_count, 50);
    assert!((contents.total_weight_kg - 30.0).abs() < 1e-9);

    let crowded = fridge
        .order_products(vec![OrderItem::new(pebble, 1).unwrap()])
        .await
        .unwrap_err();
    assert_eq!(
        crowded.to_string(),
        "Not enough space. Current: 50 items, Order: 1 items, Max: 50 items"
    );
    let heavy = fridge
        .order_products(vec![OrderItem::new(bread(), 1).unwrap()])
        .await;
    assert!(matches!(heavy, Err(FridgeError::TooHeavy { .. })));

    shutdown(fridge, handle).await;
}
