use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Represents a registered user and their shopping cart.
///
/// The cart maps product ids to requested quantities. Quantities accumulate
/// across [`User::add_to_cart`] calls, and the cart is kept as-is after an
/// order is placed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub cart: HashMap<ProductId, i32>,
}

impl User {
    /// Creates a new User with an empty cart.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, assigned by the caller
    /// * `username` - User's display name
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            cart: HashMap::new(),
        }
    }

    /// Adds `quantity` to the cart entry for `product_id`, creating the entry
    /// if absent.
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: i32) {
        *self.cart.entry(product_id).or_insert(0) += quantity;
    }
}
