//! Error types for catalog operations.

use crate::model::{ProductId, UserId};
use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// Under the permissive policy only [`CatalogError::UnknownUser`] is ever
/// produced (cart access needs a stored user); the strict policy surfaces
/// the full set.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The referenced user does not exist in the store.
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    /// The referenced product does not exist in the store.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: i32,
        available: i32,
    },

    /// The provided quantity is not positive.
    #[error("Invalid quantity for {product_id}: {quantity}")]
    InvalidQuantity {
        product_id: ProductId,
        quantity: i32,
    },
}
