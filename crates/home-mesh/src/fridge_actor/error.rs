use crate::backend::BackendError;
use crate::model::{InvalidQuantity, ProductId};
use device_actor::FrameworkError;

/// Errors returned by the fridge. Validation failures never change state.
#[derive(Debug, thiserror::Error)]
pub enum FridgeError {
    #[error("Product not found in fridge: {0}")]
    ProductNotFound(ProductId),
    #[error("Not enough {product} in fridge. Available: {available}")]
    InsufficientStock { product: String, available: u32 },
    #[error(transparent)]
    InvalidQuantity(#[from] InvalidQuantity),
    #[error("Order contains no items")]
    EmptyOrder,
    #[error("Order too heavy. Current: {current:.2}kg, Order: {requested:.2}kg, Max: {max:.2}kg")]
    TooHeavy { current: f64, requested: f64, max: f64 },
    #[error("Not enough space. Current: {current} items, Order: {requested} items, Max: {max} items")]
    NotEnoughSpace { current: u32, requested: u64, max: u32 },
    #[error("Invalid weight for {product}: {weight}kg")]
    InvalidWeight { product: String, weight: f64 },
    #[error("Order processing failed: {0}")]
    Backend(#[from] BackendError),
    #[error("Fridge unavailable: {0}")]
    Communication(#[from] FrameworkError),
}
