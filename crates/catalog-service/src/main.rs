//! # Catalog Service
//!
//! A minimal in-memory e-commerce catalog behind a single actor.
//!
//! ## 🚀 Core Components
//!
//! - **`catalog_store`**: The domain crate: users, products, orders, and the store that owns them.
//! - **`message`**: Request messages carrying oneshot response channels.
//! - **`client`**: Type-safe async wrapper that hides the message passing.
//! - **`lifecycle`**: Orchestration layer that starts and stops the actor.
//!
//! ## 📚 Quick Start
//!
//! The entry point is [`main`], which demonstrates:
//! 1. Setting up the `CatalogSystem`.
//! 2. Registering users and products.
//! 3. Filling carts and checking out.
//!
//! ## 🧪 Testing
//!
//! See `catalog_service::mock` for utilities to test client logic without
//! spawning the actor.

use catalog_service::lifecycle::{setup_tracing, CatalogSystem};
use catalog_store::{Product, ProductId, User, UserId};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting application with catalog system");

    let system = CatalogSystem::new();
    let client = &system.client;

    // Register users and products
    for user in [User::new(UserId(1), "User1"), User::new(UserId(2), "User2")] {
        client.add_user(user).await.map_err(|e| e.to_string())?;
    }
    for product in [
        Product::new(ProductId(1), "Product1", 10.0, 20),
        Product::new(ProductId(2), "Product2", 15.0, 15),
    ] {
        client.add_product(product).await.map_err(|e| e.to_string())?;
    }

    // Fill the carts
    client
        .add_to_cart(UserId(1), ProductId(1), 2)
        .await
        .map_err(|e| e.to_string())?;
    client
        .add_to_cart(UserId(2), ProductId(2), 1)
        .await
        .map_err(|e| e.to_string())?;
    client
        .add_to_cart(UserId(2), ProductId(1), 3)
        .await
        .map_err(|e| e.to_string())?;

    // Place one order per user from their current cart
    let span = tracing::info_span!("order_processing");
    async {
        for user_id in [UserId(1), UserId(2)] {
            let order_id = client.checkout(user_id).await.map_err(|e| e.to_string())?;
            info!(%user_id, %order_id, "Order placed");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Log the final state of the catalog
    let users = client.list_users().await.map_err(|e| e.to_string())?;
    let products = client
        .list_available_products()
        .await
        .map_err(|e| e.to_string())?;
    let orders = client.list_orders().await.map_err(|e| e.to_string())?;
    info!(count = users.len(), ?users, "Users");
    info!(count = products.len(), ?products, "Products");
    info!(count = orders.len(), ?orders, "Orders");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
