//! Products the fridge can stock and order.
//!
//! A [`Product`] is identified by its [`ProductId`] alone: two values with the
//! same id are the same product even if name or price differ.
use crate::model::Price;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub weight_kg: f64,
}

impl Product {
    /// Creates a product with a freshly generated id.
    pub fn new(name: impl Into<String>, price: Price, weight_kg: f64) -> Self {
        Self::with_id(ProductId::generate(), name, price, weight_kg)
    }

    pub fn with_id(id: ProductId, name: impl Into<String>, price: Price, weight_kg: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            weight_kg,
        }
    }

    /// Finite and not negative. Anything else would corrupt weight totals.
    pub fn has_valid_weight(&self) -> bool {
        self.weight_kg.is_finite() && self.weight_kg >= 0.0
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("quantity must be positive, got {0}")]
pub struct InvalidQuantity(pub u32);

/// A product with a positive quantity. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    product: Product,
    quantity: u32,
}

impl OrderItem {
    pub fn new(product: Product, quantity: u32) -> Result<Self, InvalidQuantity> {
        if quantity == 0 {
            return Err(InvalidQuantity(quantity));
        }
        Ok(Self { product, quantity })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_price(&self) -> Price {
        self.product.price.times(self.quantity)
    }

    pub fn total_weight(&self) -> f64 {
        self.product.weight_kg * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_compare_by_id_only() {
        let id = ProductId::new("milk");
        let a = Product::with_id(id.clone(), "Milk", Price::from_cents(199), 1.0);
        let b = Product::with_id(id, "Whole Milk", Price::from_cents(249), 1.0);
        assert_eq!(a, b);
        assert_ne!(a, Product::new("Milk", Price::from_cents(199), 1.0));
    }

    #[test]
    fn test_weight_must_be_finite_and_non_negative() {
        let weighed = |kg| Product::new("Thing", Price::from_cents(1), kg).has_valid_weight();
        assert!(weighed(0.0));
        assert!(weighed(2.5));
        assert!(!weighed(-0.1));
        assert!(!weighed(f64::NAN));
        assert!(!weighed(f64::INFINITY));
    }

    #[test]
    fn test_order_item_requires_positive_quantity() {
        let bread = Product::new("Bread", Price::from_cents(250), 1.0);
        assert_eq!(OrderItem::new(bread.clone(), 0), Err(InvalidQuantity(0)));

        let item = OrderItem::new(bread, 5).unwrap();
        assert_eq!(item.total_price(), Price::from_cents(1250));
        assert!((item.total_weight() - 5.0).abs() < f64::EPSILON);
    }
}
