//! # Observability & Tracing
//!
//! This module provides the tracing setup for the catalog service.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides module paths
//! (`with_target(false)`) and reads its filter from the `RUST_LOG`
//! environment variable.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full request payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=catalog_service=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown, and final table sizes
//! - **Catalog Operations**: every request at `debug`, applied mutations at
//!   `info`, rejections at `warn`
//! - **Request Flow**: client methods open spans, so with the compact format
//!   a checkout shows up as `order_processing:checkout:get_user: ...`
//!
//! With `RUST_LOG=debug` the actor logs full payloads once per request:
//!
//! ```text
//! DEBUG CreateOrder user_id=user_1 details={...}
//! INFO Order created id=order_1 orders=1
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - log fields carry the context
        .compact() // Compact format shows spans inline (e.g., "order_processing:checkout")
        .init();
}
