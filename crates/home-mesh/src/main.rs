//! # Home Mesh Demo
//!
//! Starts the whole device mesh with the in-process order processor, runs a
//! short scripted tour and keeps the mesh running until Ctrl-C.

use home_mesh::backend::LocalOrderProcessor;
use home_mesh::lifecycle::{setup_tracing, Config, HomeSystem};
use home_mesh::model::{OrderItem, Price, Product, ProductId};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::load().map_err(|e| e.to_string())?;
    setup_tracing(&config.logging.filter);

    let fee = config.processing_fee().map_err(|e| e.to_string())?;
    let backend = Arc::new(LocalOrderProcessor::new(fee, config.backend_latency()));
    let system = HomeSystem::start(&config, backend);

    tour(&system)
        .instrument(tracing::info_span!("tour"))
        .await;

    info!("Home mesh running, press Ctrl-C to stop");
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Could not listen for Ctrl-C");
    }

    system.shutdown().await
}

async fn tour(system: &HomeSystem) {
    match system.air_condition.get_status().await {
        Ok(status) => info!(?status, "Air condition"),
        Err(e) => error!(error = %e, "Air condition status failed"),
    }

    match system.media.play_movie("The Big Lebowski".to_string()).await {
        Ok(message) => info!(%message, "Media station"),
        Err(e) => error!(error = %e, "Play failed"),
    }
    match system.blinds.get_status().await {
        Ok(status) => info!(?status, "Blinds"),
        Err(e) => error!(error = %e, "Blinds status failed"),
    }

    match system.fridge.consume_product(ProductId::new("milk"), 2).await {
        Ok(message) => info!(%message, "Fridge"),
        Err(e) => error!(error = %e, "Consume failed"),
    }

    let bread = Product::new("Bread", Price::from_cents(250), 1.0);
    let order = match OrderItem::new(bread, 5) {
        Ok(item) => system.fridge.order_products(vec![item]).await,
        Err(e) => Err(e.into()),
    };
    match order {
        Ok(receipt) => info!(order_id = %receipt.order_id, total = %receipt.total_price, "Order processed"),
        Err(e) => error!(error = %e, "Order failed"),
    }

    match system.fridge.get_order_history().await {
        Ok(history) => {
            for record in &history.orders {
                info!(
                    order_id = %record.order.id(),
                    items = record.order.item_count(),
                    total = %record.order.total_price(),
                    status = ?record.status,
                    "Order history"
                );
            }
        }
        Err(e) => error!(error = %e, "Order history failed"),
    }
}
