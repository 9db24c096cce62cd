use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Represents a product in the catalog.
///
/// Stock is signed: order creation subtracts the ordered quantity with no
/// floor, so stock can go negative under the permissive policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, assigned by the caller
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `stock` - Available stock
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: i32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }
}
