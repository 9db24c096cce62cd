//! # Catalog Store
//!
//! The in-memory domain core of the catalog: users with carts, products with
//! stock, and the orders created from carts. All state lives in
//! [`CatalogStore`], a plain synchronous struct with no locking and no I/O.
//!
//! ## Semantics
//!
//! - Users and products carry caller-assigned ids; re-adding an id
//!   overwrites the previous entry.
//! - Carts and order details are keyed by [`ProductId`], so product state is
//!   always read through the store's product table.
//! - Order ids come from an explicit counter starting at 1, consumed only by
//!   successful creations.
//! - An order's `total_price` is computed when the order is created and is
//!   never recomputed afterwards.
//! - [`ValidationPolicy`] selects between the permissive default (orders
//!   never fail, stock may go negative) and strict up-front validation.
//!
//! Concurrent access is the `catalog-service` crate's job: it wraps one
//! `CatalogStore` in an actor and serializes requests through it.

pub mod error;
pub mod model;
pub mod store;

// Re-export core types for convenience
pub use error::CatalogError;
pub use model::{Order, OrderDetails, OrderId, Product, ProductId, User, UserId};
pub use store::{CatalogStore, ValidationPolicy};
