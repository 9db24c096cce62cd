//! # Catalog Service
//!
//! This library exposes the actor wrapper around the `catalog-store` domain
//! crate: the request messages, the actor, the client, mock utilities for
//! testing, and the system lifecycle.

pub mod actor;
pub mod client;
pub mod error;
pub mod lifecycle;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::CatalogActor;
pub use client::CatalogClient;
pub use error::ServiceError;
pub use lifecycle::CatalogSystem;
pub use message::{CatalogRequest, Response};
