//! # Service Errors
//!
//! This module defines the client-facing error type. Domain failures from the
//! store pass through unchanged; the two transport variants cover a closed or
//! crashed actor.

use catalog_store::CatalogError;
use thiserror::Error;

/// Errors returned by `CatalogClient` calls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The store rejected the operation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The actor's request channel is closed.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the response channel before answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
}
