use tracing::{error, info};

use catalog_store::ValidationPolicy;

use crate::actor::CatalogActor;
use crate::client::CatalogClient;

/// The runtime orchestrator for the catalog service.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the catalog actor
/// - **Configuration**: choosing the store's validation policy at startup
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new();
///
/// // Use the client to interact with the catalog
/// system.client.add_user(user).await?;
/// let order_id = system.client.checkout(user_id).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the catalog actor
    pub client: CatalogClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Capacity of the actor's request channel.
    const CHANNEL_BUFFER: usize = 32;

    /// Creates and starts a system with the default (permissive) policy.
    pub fn new() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }

    /// Creates and starts a system with an explicit validation policy.
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        let (actor, client) = CatalogActor::new(Self::CHANNEL_BUFFER, policy);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the request channel. The actor drains any
    /// queued requests, exits its event loop, and this method waits for the
    /// task to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the client drops the channel sender. The actor's receiver
        // returns None and its loop exits.
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
