use crate::model::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Ordered quantities keyed by product id, captured when the order is placed.
pub type OrderDetails = HashMap<ProductId, i32>;

/// Represents a placed order.
///
/// `total_price` is computed once at creation and does not track later price
/// changes to the referenced products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub details: OrderDetails,
    pub total_price: f64,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, assigned by the store's order counter
    /// * `user_id` - ID of the user placing the order
    /// * `details` - Ordered quantities keyed by product id
    /// * `total_price` - Total price at the moment of creation
    pub fn new(id: OrderId, user_id: UserId, details: OrderDetails, total_price: f64) -> Self {
        Self {
            id,
            user_id,
            details,
            total_price,
        }
    }
}
