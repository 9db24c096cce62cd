//! # Catalog Actor
//!
//! This module defines the `CatalogActor`, the server side of the service. It
//! owns the whole `CatalogStore` and processes requests sequentially, giving
//! callers exclusive access to the catalog without any locking.

use catalog_store::{CatalogStore, ValidationPolicy};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::client::CatalogClient;
use crate::message::CatalogRequest;

/// The actor that owns the catalog state.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// The whole catalog lives behind one actor because an order touches users,
/// products, and orders together. One task processing one message at a time
/// means checkouts on the same product can never interleave, and the store
/// needs no `Mutex` around its tables.
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    store: CatalogStore,
}

impl CatalogActor {
    /// Creates a new `CatalogActor` and its associated `CatalogClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls to the client will wait until there is space.
    /// * `policy` - Validation policy for the wrapped store.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `CatalogActor` instance (the server), which must be run via `.run()`.
    /// 2. The `CatalogClient` instance, which can be cloned and shared to send requests.
    pub fn new(buffer_size: usize, policy: ValidationPolicy) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: CatalogStore::with_policy(policy),
        };
        let client = CatalogClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        info!(policy = ?self.store.policy(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::AddUser { user, respond_to } => {
                    debug!(id = %user.id, "AddUser");
                    let previous = self.store.add_user(user);
                    info!(
                        users = self.store.user_count(),
                        replaced = previous.is_some(),
                        "User stored"
                    );
                    let _ = respond_to.send(Ok(previous));
                }
                CatalogRequest::AddProduct { product, respond_to } => {
                    debug!(id = %product.id, "AddProduct");
                    let previous = self.store.add_product(product);
                    info!(
                        products = self.store.product_count(),
                        replaced = previous.is_some(),
                        "Product stored"
                    );
                    let _ = respond_to.send(Ok(previous));
                }
                CatalogRequest::AddToCart {
                    user_id,
                    product_id,
                    quantity,
                    respond_to,
                } => {
                    debug!(%user_id, %product_id, quantity, "AddToCart");
                    let result = self.store.add_to_cart(user_id, product_id, quantity);
                    match &result {
                        Ok(()) => info!(%user_id, %product_id, quantity, "Cart updated"),
                        Err(e) => warn!(%user_id, error = %e, "AddToCart failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::CreateOrder {
                    user_id,
                    details,
                    respond_to,
                } => {
                    debug!(%user_id, ?details, "CreateOrder");
                    let result = self.store.create_order(user_id, details);
                    match &result {
                        Ok(id) => info!(%id, orders = self.store.order_count(), "Order created"),
                        Err(e) => warn!(%user_id, error = %e, "CreateOrder failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::UpdateStock { details, respond_to } => {
                    debug!(?details, "UpdateStock");
                    self.store.update_stock(&details);
                    info!(lines = details.len(), "Stock updated");
                    let _ = respond_to.send(Ok(()));
                }
                CatalogRequest::GetUser { id, respond_to } => {
                    let user = self.store.get_user(id).cloned();
                    let found = user.is_some();
                    debug!(%id, found, "GetUser");
                    let _ = respond_to.send(Ok(user));
                }
                CatalogRequest::GetProduct { id, respond_to } => {
                    let product = self.store.get_product(id).cloned();
                    let found = product.is_some();
                    debug!(%id, found, "GetProduct");
                    let _ = respond_to.send(Ok(product));
                }
                CatalogRequest::GetOrder { id, respond_to } => {
                    let order = self.store.get_order(id).cloned();
                    let found = order.is_some();
                    debug!(%id, found, "GetOrder");
                    let _ = respond_to.send(Ok(order));
                }
                CatalogRequest::ListUsers { respond_to } => {
                    let users = self.store.list_users();
                    debug!(count = users.len(), "ListUsers");
                    let _ = respond_to.send(Ok(users));
                }
                CatalogRequest::ListAvailableProducts { respond_to } => {
                    let products = self.store.list_available_products();
                    debug!(count = products.len(), "ListAvailableProducts");
                    let _ = respond_to.send(Ok(products));
                }
                CatalogRequest::ListOrders { respond_to } => {
                    let orders = self.store.list_orders();
                    debug!(count = orders.len(), "ListOrders");
                    let _ = respond_to.send(Ok(orders));
                }
            }
        }

        info!(
            users = self.store.user_count(),
            products = self.store.product_count(),
            orders = self.store.order_count(),
            "Shutdown"
        );
    }
}
