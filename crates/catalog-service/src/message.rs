//! # Request Messages
//!
//! This module defines the message type sent from the `CatalogClient` to the
//! `CatalogActor`, one variant per store operation.

use catalog_store::{CatalogError, Order, OrderDetails, OrderId, Product, ProductId, User, UserId};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, CatalogError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants mirror the `CatalogStore` API one-to-one. Mutations answer
/// with whatever the store method returns; reads answer with clones of the
/// stored values, so replies never borrow actor state.
#[derive(Debug)]
pub enum CatalogRequest {
    AddUser {
        user: User,
        respond_to: Response<Option<User>>,
    },
    AddProduct {
        product: Product,
        respond_to: Response<Option<Product>>,
    },
    AddToCart {
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
        respond_to: Response<()>,
    },
    CreateOrder {
        user_id: UserId,
        details: OrderDetails,
        respond_to: Response<OrderId>,
    },
    UpdateStock {
        details: OrderDetails,
        respond_to: Response<()>,
    },
    GetUser {
        id: UserId,
        respond_to: Response<Option<User>>,
    },
    GetProduct {
        id: ProductId,
        respond_to: Response<Option<Product>>,
    },
    GetOrder {
        id: OrderId,
        respond_to: Response<Option<Order>>,
    },
    ListUsers {
        respond_to: Response<Vec<User>>,
    },
    ListAvailableProducts {
        respond_to: Response<Vec<Product>>,
    },
    ListOrders {
        respond_to: Response<Vec<Order>>,
    },
}
