//! # Mock Client & Testing Utilities
//!
//! The [`MockClient`] type speaks the same message protocol as the real actor
//! but operates entirely in-memory. It lets you set expectations and return
//! values for unit tests, enabling fast, deterministic testing of client
//! orchestration (e.g. `checkout`) without spawning the actor.
//!
//! ## When to use Mocks vs the Real Actor
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver for hand-written
//! request matching, or use the fluent [`MockClient`] API.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use catalog_store::{CatalogError, OrderDetails, OrderId, User, UserId};
use tokio::sync::mpsc;

use crate::client::CatalogClient;
use crate::message::{CatalogRequest, Response};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
///
/// This enum is used internally by `MockClient` to track what requests are
/// expected and what responses should be returned.
enum Expectation {
    GetUser {
        id: UserId,
        response: Result<Option<User>, CatalogError>,
    },
    CreateOrder {
        response: Result<OrderId, CatalogError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::new();
/// mock.expect_get_user(UserId(1)).return_ok(Some(user));
/// mock.expect_create_order().return_ok(OrderId(1));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient {
    client: CatalogClient,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CatalogRequest>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before touching the oneshot

                match (request, expectation) {
                    (
                        CatalogRequest::GetUser { id, respond_to },
                        Some(Expectation::GetUser {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "GetUser id mismatch");
                        let _ = respond_to.send(response);
                    }
                    (
                        CatalogRequest::CreateOrder {
                            user_id: _,
                            details: _,
                            respond_to,
                        },
                        Some(Expectation::CreateOrder { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: CatalogClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CatalogClient {
        self.client.clone()
    }

    /// Expects a `get_user` operation.
    pub fn expect_get_user(&mut self, id: UserId) -> GetUserExpectationBuilder {
        GetUserExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create_order` operation.
    pub fn expect_create_order(&mut self) -> CreateOrderExpectationBuilder {
        CreateOrderExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get_user` expectations.
pub struct GetUserExpectationBuilder {
    id: UserId,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl GetUserExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<User>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::GetUser {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CatalogError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::GetUser {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create_order` expectations.
pub struct CreateOrderExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl CreateOrderExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, id: OrderId) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::CreateOrder { response: Ok(id) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CatalogError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::CreateOrder {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full `CatalogActor` if we are
/// just testing the client logic around it. This client sends messages to a
/// channel the test controls; the test inspects the messages arriving there
/// and answers them, simulating the actor's behavior (success, failure,
/// delays) deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a GetUser request
pub async fn expect_get_user(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(UserId, Response<Option<User>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::GetUser { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a CreateOrder request
pub async fn expect_create_order(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(UserId, OrderDetails, Response<OrderId>)> {
    match receiver.recv().await {
        Some(CatalogRequest::CreateOrder {
            user_id,
            details,
            respond_to,
        }) => Some((user_id, details, respond_to)),
        _ => None,
    }
}
