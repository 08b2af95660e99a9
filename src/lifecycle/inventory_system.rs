use std::sync::Arc;
use tracing::{error, info};

use crate::clients::InventoryClient;
use crate::inventory_actor::{InventoryActor, InventoryError, InventorySeed};
use crate::lifecycle::InventoryConfig;
use crate::services::{InventoryServices, PlaceholderServices};

/// Starts the inventory actor and owns its task.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new();
///
/// let snapshot = system.client.add_tapped().await?;
/// let snapshot = system.client.add_saved().await?;
///
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for interacting with the inventory actor
    pub client: InventoryClient,

    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// An empty inventory backed by [`PlaceholderServices`] and default delays.
    pub fn new() -> Self {
        Self::start(
            InventoryConfig::default(),
            InventorySeed::default(),
            Arc::new(PlaceholderServices),
        )
    }

    /// Spawns the actor with the given settings, initial contents and services.
    pub fn start(
        config: InventoryConfig,
        seed: InventorySeed,
        services: Arc<dyn InventoryServices>,
    ) -> Self {
        let (actor, client) = InventoryActor::new(config, seed);
        let handle = tokio::spawn(actor.run(services));
        Self { client, handle }
    }

    /// Drops the client and waits for the actor to drain its mailbox and stop.
    ///
    /// Other clones of the client keep the actor alive; shut down only after they are gone.
    pub async fn shutdown(self) -> Result<(), InventoryError> {
        info!("Shutting down inventory...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(InventoryError::ActorFailed(e.to_string()));
        }

        info!("Inventory shutdown complete.");
        Ok(())
    }
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}
