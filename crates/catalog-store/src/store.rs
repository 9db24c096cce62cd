//! The in-memory catalog store: users, products, and orders in one place.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::model::{Order, OrderDetails, OrderId, Product, ProductId, User, UserId};

/// Controls how much checking the store performs before mutating state.
///
/// The permissive default reproduces the behavior of a store with no business
/// rules: orders always go through and stock is allowed to run negative. The
/// strict policy validates every order up front and rejects bad input without
/// touching any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// No checks. Orders always succeed, unknown product ids are carried
    /// through as-is, and stock may go negative.
    #[default]
    Permissive,
    /// Reject unknown users and products, non-positive quantities, and
    /// orders that would drive stock below zero, before any mutation.
    Strict,
}

/// The catalog state: three id-keyed tables plus the order-id counter.
///
/// # Concurrency Model
/// This struct is plain synchronous state and is not thread-safe on its own.
/// Concurrent access goes through the actor in `catalog-service`, which owns
/// one instance exclusively and processes requests sequentially, so the
/// tables never need a `Mutex`.
#[derive(Debug)]
pub struct CatalogStore {
    users: HashMap<UserId, User>,
    products: HashMap<ProductId, Product>,
    orders: HashMap<OrderId, Order>,
    next_order_id: u32,
    policy: ValidationPolicy,
}

impl CatalogStore {
    /// Creates an empty store with the default (permissive) policy.
    pub fn new() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }

    /// Creates an empty store with an explicit validation policy.
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            users: HashMap::new(),
            products: HashMap::new(),
            orders: HashMap::new(),
            next_order_id: 1,
            policy,
        }
    }

    /// The policy this store was built with.
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Inserts a user keyed by its id, replacing and returning any previous
    /// entry with the same id.
    pub fn add_user(&mut self, user: User) -> Option<User> {
        self.users.insert(user.id, user)
    }

    /// Inserts a product keyed by its id, replacing and returning any
    /// previous entry with the same id.
    pub fn add_product(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id, product)
    }

    /// Adds `quantity` to the user's cart entry for `product_id`.
    ///
    /// The user must already exist; the product id is not checked, so carts
    /// may reference products the store has never seen. Under the strict
    /// policy a non-positive quantity is rejected.
    pub fn add_to_cart(
        &mut self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), CatalogError> {
        if self.policy == ValidationPolicy::Strict && quantity <= 0 {
            return Err(CatalogError::InvalidQuantity {
                product_id,
                quantity,
            });
        }
        let user = self
            .users
            .get_mut(&user_id)
            .ok_or(CatalogError::UnknownUser(user_id))?;
        user.add_to_cart(product_id, quantity);
        Ok(())
    }

    /// Creates an order for `user_id` from `details`, assigns the next order
    /// id, and subtracts the ordered quantities from stock.
    ///
    /// The total price is computed here, once. Later price changes do not
    /// affect stored orders.
    ///
    /// Under the permissive policy nothing is checked: an unknown user id is
    /// recorded as given, lines for unknown product ids price at 0.0 and
    /// leave stock alone (while staying in the order's details), and stock
    /// may go negative. Under the strict policy the order is validated first
    /// and a rejection leaves the store untouched, including the order
    /// counter.
    pub fn create_order(
        &mut self,
        user_id: UserId,
        details: OrderDetails,
    ) -> Result<OrderId, CatalogError> {
        if self.policy == ValidationPolicy::Strict {
            self.validate_order(user_id, &details)?;
        }
        let id = OrderId(self.next_order_id);
        let total_price = self.order_total(&details);
        let order = Order::new(id, user_id, details, total_price);
        self.next_order_id += 1;
        let lines = order.details.clone();
        self.orders.insert(id, order);
        self.update_stock(&lines);
        Ok(id)
    }

    /// Subtracts each quantity in `details` from the matching product's
    /// stock.
    ///
    /// There is no floor: stock goes negative when more is ordered than is
    /// available. Ids with no matching product are skipped. Validation, when
    /// enabled, happens in [`CatalogStore::create_order`], never here.
    pub fn update_stock(&mut self, details: &OrderDetails) {
        for (product_id, &quantity) in details {
            if let Some(product) = self.products.get_mut(product_id) {
                product.stock -= quantity;
            }
        }
    }

    fn validate_order(&self, user_id: UserId, details: &OrderDetails) -> Result<(), CatalogError> {
        if !self.users.contains_key(&user_id) {
            return Err(CatalogError::UnknownUser(user_id));
        }
        for (&product_id, &quantity) in details {
            if quantity <= 0 {
                return Err(CatalogError::InvalidQuantity {
                    product_id,
                    quantity,
                });
            }
            let product = self
                .products
                .get(&product_id)
                .ok_or(CatalogError::UnknownProduct(product_id))?;
            if product.stock < quantity {
                return Err(CatalogError::InsufficientStock {
                    product_id,
                    requested: quantity,
                    available: product.stock,
                });
            }
        }
        Ok(())
    }

    fn order_total(&self, details: &OrderDetails) -> f64 {
        details
            .iter()
            .filter_map(|(product_id, &quantity)| {
                self.products
                    .get(product_id)
                    .map(|product| product.price * f64::from(quantity))
            })
            .sum()
    }

    /// Looks up a user by id.
    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Looks up a product by id.
    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Looks up an order by id.
    pub fn get_order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Returns a snapshot of all users, in unspecified order.
    pub fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    /// Returns a snapshot of all products, in unspecified order.
    pub fn list_available_products(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Returns a snapshot of all orders, in unspecified order.
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.values().cloned().collect()
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of stored products.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of stored orders.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two users and two products, the same ids throughout the tests.
    fn seeded(policy: ValidationPolicy) -> CatalogStore {
        let mut store = CatalogStore::with_policy(policy);
        store.add_user(User::new(UserId(1), "User1"));
        store.add_user(User::new(UserId(2), "User2"));
        store.add_product(Product::new(ProductId(1), "Product1", 10.0, 20));
        store.add_product(Product::new(ProductId(2), "Product2", 15.0, 15));
        store
    }

    fn details(lines: &[(u32, i32)]) -> OrderDetails {
        lines
            .iter()
            .map(|&(id, quantity)| (ProductId(id), quantity))
            .collect()
    }

    #[test]
    fn test_add_to_cart_accumulates_quantity() {
        let mut store = seeded(ValidationPolicy::Permissive);

        store.add_to_cart(UserId(1), ProductId(1), 2).unwrap();
        store.add_to_cart(UserId(1), ProductId(1), 3).unwrap();

        let cart = &store.get_user(UserId(1)).unwrap().cart;
        assert_eq!(cart.get(&ProductId(1)), Some(&5));
        assert_eq!(cart.len(), 1, "Same product should stay a single entry");
    }

    #[test]
    fn test_add_to_cart_requires_known_user() {
        for policy in [ValidationPolicy::Permissive, ValidationPolicy::Strict] {
            let mut store = seeded(policy);
            let result = store.add_to_cart(UserId(99), ProductId(1), 1);
            assert_eq!(result, Err(CatalogError::UnknownUser(UserId(99))));
        }
    }

    #[test]
    fn test_add_to_cart_accepts_unknown_product() {
        let mut store = seeded(ValidationPolicy::Permissive);

        store.add_to_cart(UserId(1), ProductId(42), 4).unwrap();

        let cart = &store.get_user(UserId(1)).unwrap().cart;
        assert_eq!(cart.get(&ProductId(42)), Some(&4));
    }

    #[test]
    fn test_order_ids_are_sequential_from_one() {
        let mut store = seeded(ValidationPolicy::Permissive);

        let first = store.create_order(UserId(1), details(&[(1, 1)])).unwrap();
        let second = store.create_order(UserId(2), details(&[(2, 1)])).unwrap();
        let third = store.create_order(UserId(1), details(&[(1, 2)])).unwrap();

        assert_eq!(first, OrderId(1));
        assert_eq!(second, OrderId(2));
        assert_eq!(third, OrderId(3));
    }

    #[test]
    fn test_total_price_is_frozen_at_creation() {
        let mut store = seeded(ValidationPolicy::Permissive);

        let id = store.create_order(UserId(1), details(&[(1, 2)])).unwrap();
        assert_eq!(store.get_order(id).unwrap().total_price, 20.0);

        // Overwriting the product changes the price for future orders only.
        store.add_product(Product::new(ProductId(1), "Product1", 99.0, 20));
        assert_eq!(store.get_order(id).unwrap().total_price, 20.0);

        let next = store.create_order(UserId(1), details(&[(1, 2)])).unwrap();
        assert_eq!(store.get_order(next).unwrap().total_price, 198.0);
    }

    #[test]
    fn test_create_order_decrements_stock_exactly() {
        let mut store = seeded(ValidationPolicy::Permissive);

        store.create_order(UserId(1), details(&[(1, 3), (2, 5)])).unwrap();

        assert_eq!(store.get_product(ProductId(1)).unwrap().stock, 17);
        assert_eq!(store.get_product(ProductId(2)).unwrap().stock, 10);
    }

    #[test]
    fn test_stock_goes_negative_without_strict_policy() {
        let mut store = seeded(ValidationPolicy::Permissive);

        let id = store.create_order(UserId(1), details(&[(2, 40)])).unwrap();

        assert_eq!(store.get_product(ProductId(2)).unwrap().stock, -25);
        assert_eq!(store.get_order(id).unwrap().total_price, 600.0);
    }

    #[test]
    fn test_cart_is_kept_after_order() {
        let mut store = seeded(ValidationPolicy::Permissive);
        store.add_to_cart(UserId(1), ProductId(1), 2).unwrap();

        let cart = store.get_user(UserId(1)).unwrap().cart.clone();
        store.create_order(UserId(1), cart).unwrap();

        assert_eq!(
            store.get_user(UserId(1)).unwrap().cart.get(&ProductId(1)),
            Some(&2),
            "Ordering must not clear the cart"
        );
    }

    #[test]
    fn test_unknown_product_line_prices_at_zero_and_skips_stock() {
        let mut store = seeded(ValidationPolicy::Permissive);

        let id = store
            .create_order(UserId(1), details(&[(1, 2), (77, 4)]))
            .unwrap();

        let order = store.get_order(id).unwrap();
        assert_eq!(order.total_price, 20.0, "Unknown line contributes nothing");
        assert_eq!(order.details.get(&ProductId(77)), Some(&4));
        assert_eq!(store.get_product(ProductId(1)).unwrap().stock, 18);
        assert!(store.get_product(ProductId(77)).is_none());
    }

    #[test]
    fn test_negative_quantity_flows_through_arithmetic() {
        let mut store = seeded(ValidationPolicy::Permissive);

        let id = store.create_order(UserId(1), details(&[(1, -2)])).unwrap();

        assert_eq!(store.get_order(id).unwrap().total_price, -20.0);
        assert_eq!(
            store.get_product(ProductId(1)).unwrap().stock,
            22,
            "Subtracting a negative quantity raises stock"
        );
    }

    #[test]
    fn test_empty_details_make_an_empty_order() {
        let mut store = seeded(ValidationPolicy::Permissive);

        let id = store.create_order(UserId(1), OrderDetails::new()).unwrap();

        let order = store.get_order(id).unwrap();
        assert_eq!(order.total_price, 0.0);
        assert!(order.details.is_empty());
        assert_eq!(store.get_product(ProductId(1)).unwrap().stock, 20);
    }

    #[test]
    fn test_permissive_order_accepts_unknown_user() {
        let mut store = seeded(ValidationPolicy::Permissive);

        let id = store.create_order(UserId(99), details(&[(1, 1)])).unwrap();

        assert_eq!(store.get_order(id).unwrap().user_id, UserId(99));
        assert_eq!(store.get_product(ProductId(1)).unwrap().stock, 19);
    }

    #[test]
    fn test_adding_existing_id_overwrites() {
        let mut store = seeded(ValidationPolicy::Permissive);

        let previous = store.add_user(User::new(UserId(1), "Renamed"));
        assert_eq!(previous.unwrap().username, "User1");
        assert_eq!(store.list_users().len(), 2);
        assert_eq!(store.get_user(UserId(1)).unwrap().username, "Renamed");

        let previous = store.add_product(Product::new(ProductId(2), "Product2", 9.0, 3));
        assert_eq!(previous.unwrap().stock, 15);
        assert_eq!(store.list_available_products().len(), 2);
        assert_eq!(store.get_product(ProductId(2)).unwrap().stock, 3);
    }

    #[test]
    fn test_list_operations_return_snapshots() {
        let mut store = seeded(ValidationPolicy::Permissive);

        let users = store.list_users();
        let products = store.list_available_products();
        assert_eq!(users.len(), 2);
        assert_eq!(products.len(), 2);
        assert!(store.list_orders().is_empty());

        // Later mutations must not show up in snapshots taken before them.
        store.add_user(User::new(UserId(3), "User3"));
        store.create_order(UserId(1), details(&[(1, 1)])).unwrap();
        assert_eq!(users.len(), 2);
        assert!(products.iter().any(|p| p.id == ProductId(1) && p.stock == 20));
        assert_eq!(store.list_users().len(), 3);
        assert_eq!(store.list_orders().len(), 1);
    }

    #[test]
    fn test_update_stock_is_unguarded() {
        let mut store = seeded(ValidationPolicy::Strict);

        // Direct stock updates bypass order validation entirely.
        store.update_stock(&details(&[(1, 25), (42, 3)]));

        assert_eq!(store.get_product(ProductId(1)).unwrap().stock, -5);
        assert!(store.get_product(ProductId(42)).is_none());
    }

    #[test]
    fn test_strict_accepts_valid_order() {
        let mut store = seeded(ValidationPolicy::Strict);

        let id = store
            .create_order(UserId(2), details(&[(1, 3), (2, 1)]))
            .unwrap();

        let order = store.get_order(id).unwrap();
        assert_eq!(order.id, OrderId(1));
        assert_eq!(order.total_price, 45.0);
        assert_eq!(store.get_product(ProductId(1)).unwrap().stock, 17);
        assert_eq!(store.get_product(ProductId(2)).unwrap().stock, 14);
    }

    #[test]
    fn test_strict_rejects_unknown_user() {
        let mut store = seeded(ValidationPolicy::Strict);

        let result = store.create_order(UserId(99), details(&[(1, 1)]));

        assert_eq!(result, Err(CatalogError::UnknownUser(UserId(99))));
    }

    #[test]
    fn test_strict_rejects_unknown_product() {
        let mut store = seeded(ValidationPolicy::Strict);

        let result = store.create_order(UserId(1), details(&[(77, 1)]));

        assert_eq!(result, Err(CatalogError::UnknownProduct(ProductId(77))));
    }

    #[test]
    fn test_strict_rejects_insufficient_stock() {
        let mut store = seeded(ValidationPolicy::Strict);

        let result = store.create_order(UserId(1), details(&[(2, 40)]));

        assert_eq!(
            result,
            Err(CatalogError::InsufficientStock {
                product_id: ProductId(2),
                requested: 40,
                available: 15,
            })
        );
    }

    #[test]
    fn test_strict_rejects_non_positive_quantity() {
        let mut store = seeded(ValidationPolicy::Strict);

        for quantity in [0, -3] {
            let result = store.create_order(UserId(1), details(&[(1, quantity)]));
            assert_eq!(
                result,
                Err(CatalogError::InvalidQuantity {
                    product_id: ProductId(1),
                    quantity,
                })
            );
        }

        let result = store.add_to_cart(UserId(1), ProductId(1), 0);
        assert_eq!(
            result,
            Err(CatalogError::InvalidQuantity {
                product_id: ProductId(1),
                quantity: 0,
            })
        );
    }

    #[test]
    fn test_strict_rejection_leaves_store_untouched() {
        let mut store = seeded(ValidationPolicy::Strict);

        store
            .create_order(UserId(1), details(&[(1, 5), (2, 40)]))
            .unwrap_err();

        // No partial stock updates, no stored order, no consumed id.
        assert_eq!(store.get_product(ProductId(1)).unwrap().stock, 20);
        assert_eq!(store.get_product(ProductId(2)).unwrap().stock, 15);
        assert!(store.list_orders().is_empty());

        let id = store.create_order(UserId(1), details(&[(1, 1)])).unwrap();
        assert_eq!(id, OrderId(1), "Rejected orders must not consume ids");
    }
}
