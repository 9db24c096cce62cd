//! # Catalog Client
//!
//! This module defines the client for communicating with the catalog actor.

use catalog_store::{CatalogError, Order, OrderDetails, OrderId, Product, ProductId, User, UserId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::error::ServiceError;
use crate::message::CatalogRequest;

/// A type-safe client for interacting with the catalog actor.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – all methods return `Future`s that resolve to
///   `Result<…, ServiceError>`.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    async fn send<T>(
        &self,
        request: CatalogRequest,
        response: oneshot::Receiver<Result<T, CatalogError>>,
    ) -> Result<T, ServiceError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| ServiceError::ActorClosed)?;
        let result = response.await.map_err(|_| ServiceError::ActorDropped)?;
        Ok(result?)
    }

    /// Stores a user, returning the entry it replaced, if any.
    #[instrument(skip(self, user))]
    pub async fn add_user(&self, user: User) -> Result<Option<User>, ServiceError> {
        debug!(id = %user.id, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CatalogRequest::AddUser { user, respond_to }, response)
            .await
    }

    /// Stores a product, returning the entry it replaced, if any.
    #[instrument(skip(self, product))]
    pub async fn add_product(&self, product: Product) -> Result<Option<Product>, ServiceError> {
        debug!(id = %product.id, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CatalogRequest::AddProduct { product, respond_to }, response)
            .await
    }

    /// Adds `quantity` to the user's cart entry for `product_id`.
    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), ServiceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(
            CatalogRequest::AddToCart {
                user_id,
                product_id,
                quantity,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Creates an order for `user_id` from the given details.
    #[instrument(skip(self, details))]
    pub async fn create_order(
        &self,
        user_id: UserId,
        details: OrderDetails,
    ) -> Result<OrderId, ServiceError> {
        debug!(?details, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(
            CatalogRequest::CreateOrder {
                user_id,
                details,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Subtracts the given quantities from stock, skipping unknown ids.
    #[instrument(skip(self, details))]
    pub async fn update_stock(&self, details: OrderDetails) -> Result<(), ServiceError> {
        debug!(?details, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CatalogRequest::UpdateStock { details, respond_to }, response)
            .await
    }

    /// Fetches a user by id.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<Option<User>, ServiceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CatalogRequest::GetUser { id, respond_to }, response)
            .await
    }

    /// Fetches a product by id.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ServiceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CatalogRequest::GetProduct { id, respond_to }, response)
            .await
    }

    /// Fetches an order by id.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, ServiceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CatalogRequest::GetOrder { id, respond_to }, response)
            .await
    }

    /// Returns a snapshot of all users.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CatalogRequest::ListUsers { respond_to }, response)
            .await
    }

    /// Returns a snapshot of all products.
    #[instrument(skip(self))]
    pub async fn list_available_products(&self) -> Result<Vec<Product>, ServiceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CatalogRequest::ListAvailableProducts { respond_to }, response)
            .await
    }

    /// Returns a snapshot of all orders.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.send(CatalogRequest::ListOrders { respond_to }, response)
            .await
    }

    /// Places an order from the user's current cart.
    ///
    /// Client-side orchestration: fetches the user, then submits the fetched
    /// cart as the order details. The order captures the cart as it was at
    /// the fetch; the cart itself stays untouched in the store.
    #[instrument(skip(self))]
    pub async fn checkout(&self, user_id: UserId) -> Result<OrderId, ServiceError> {
        debug!("Sending request");
        let user = self
            .get_user(user_id)
            .await?
            .ok_or(CatalogError::UnknownUser(user_id))?;
        self.create_order(user_id, user.cart).await
    }
}
