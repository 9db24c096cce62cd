//! Orchestration layer: system startup, graceful shutdown, and tracing setup.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::CatalogSystem;
pub use tracing::setup_tracing;
