//! Stock held by the fridge.

use crate::fridge_actor::FridgeError;
use crate::model::{InvalidQuantity, Price, Product, ProductId};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct StockLevel {
    pub product: Product,
    pub quantity: u32,
}

/// Outcome of taking stock out.
#[derive(Debug, Clone, PartialEq)]
pub struct Consumption {
    pub product: Product,
    pub before: u32,
    pub remaining: u32,
}

/// Product to quantity-on-hand. Entries never hold a zero quantity.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    stock: HashMap<ProductId, StockLevel>,
}

impl Inventory {
    /// The stock a new kitchen fridge starts with.
    pub fn kitchen_defaults() -> Self {
        let mut inventory = Self::default();
        let defaults = [
            ("milk", "Milk", 199, 1.0, 2),
            ("cheese", "Cheese", 349, 0.5, 1),
            ("eggs", "Eggs", 229, 0.4, 10),
            ("yogurt", "Yogurt", 99, 0.2, 4),
            ("orange-juice", "Orange Juice", 249, 1.0, 1),
        ];
        for (id, name, cents, weight_kg, quantity) in defaults {
            let product = Product::with_id(ProductId::new(id), name, Price::from_cents(cents), weight_kg);
            inventory.add(product, quantity);
        }
        inventory
    }

    /// Adds `quantity` units, merging with any existing entry for the product.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        self.stock
            .entry(product.id.clone())
            .and_modify(|level| level.quantity = level.quantity.saturating_add(quantity))
            .or_insert(StockLevel { product, quantity });
    }

    /// Removes `quantity` units. An entry reaching zero is dropped.
    pub fn take(&mut self, id: &ProductId, quantity: u32) -> Result<Consumption, FridgeError> {
        if quantity == 0 {
            return Err(InvalidQuantity(quantity).into());
        }
        let level = self
            .stock
            .get_mut(id)
            .ok_or_else(|| FridgeError::ProductNotFound(id.clone()))?;
        if quantity > level.quantity {
            return Err(FridgeError::InsufficientStock {
                product: level.product.name.clone(),
                available: level.quantity,
            });
        }

        let before = level.quantity;
        level.quantity -= quantity;
        let consumption = Consumption {
            product: level.product.clone(),
            before,
            remaining: level.quantity,
        };
        if consumption.remaining == 0 {
            self.stock.remove(id);
        }
        Ok(consumption)
    }

    pub fn quantity(&self, id: &ProductId) -> u32 {
        self.stock.get(id).map_or(0, |level| level.quantity)
    }

    pub fn total_weight(&self) -> f64 {
        self.stock
            .values()
            .map(|level| level.product.weight_kg * f64::from(level.quantity))
            .sum()
    }

    pub fn item_count(&self) -> u32 {
        self.stock
            .values()
            .fold(0u32, |count, level| count.saturating_add(level.quantity))
    }

    /// Snapshot ordered by product name.
    pub fn levels(&self) -> Vec<StockLevel> {
        let mut levels: Vec<_> = self.stock.values().cloned().collect();
        levels.sort_by(|a, b| a.product.name.cmp(&b.product.name));
        levels
    }
}
